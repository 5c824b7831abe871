//! Advanced GrandLight examples - login form and dashboard.
//!
//! Demonstrates form layouts, custom color themes, and interactive
//! hover/focus effects on two separately built scenes.

use std::rc::Rc;

use grandlight::theme::GlassTheme;
use grandlight::{
    ButtonProps, Component, Container, GlassButton, GlassInput, GlassLabel, GlassPanel,
    InputProps, LabelProps, PanelProps, Position, Result, Size, TextAlign, TextStyle, Window,
    WindowProps,
};

fn create_login_form() -> Result<Window> {
    let window = Window::new(WindowProps {
        title: "GrandLight Login".to_string(),
        size: Size::new(500, 600)?,
        background_gradient: vec![
            "#4158D0".to_string(),
            "#C850C0".to_string(),
            "#FFCC70".to_string(),
        ],
        ..Default::default()
    })?;

    let login_panel = GlassPanel::new(PanelProps {
        size: Size::new(400, 450)?,
        effect: Some(GlassTheme::light()),
        padding: 40,
        ..Default::default()
    });
    window.center_component(&login_panel)?;

    let title = GlassLabel::new(LabelProps {
        text: "Secure Login".to_string(),
        position: Position::new(0, 0),
        size: Size::new(320, 60)?,
        font_size: Some(28),
        style: TextStyle::BOLD,
        text_color: Some((60, 60, 80).into()),
        align: TextAlign::Center,
        background: true,
        effect: Some(GlassTheme::frosted()),
        ..Default::default()
    });
    login_panel.add(&title)?;

    let welcome = GlassLabel::new(LabelProps {
        text: "Welcome back! Please login to your account.".to_string(),
        position: Position::new(0, 80),
        size: Size::new(320, 30)?,
        font_size: Some(13),
        text_color: Some((100, 100, 120).into()),
        align: TextAlign::Center,
        ..Default::default()
    });
    login_panel.add(&welcome)?;

    // Username and password rows share a layout
    for (label_text, placeholder, y) in [
        ("Username", "Enter your username", 130),
        ("Password", "Enter your password", 220),
    ] {
        let field_label = GlassLabel::new(LabelProps {
            text: label_text.to_string(),
            position: Position::new(0, y),
            size: Size::new(320, 25)?,
            font_size: Some(12),
            style: TextStyle::BOLD,
            text_color: Some((80, 80, 100).into()),
            ..Default::default()
        });
        login_panel.add(&field_label)?;

        let field_input = GlassInput::new(InputProps {
            placeholder: placeholder.to_string(),
            position: Position::new(0, y + 30),
            size: Size::new(320, 45)?,
            effect: Some(GlassTheme::light()),
            focus_effect: Some(GlassTheme::colorful((150, 150, 255))?),
            font_size: Some(14),
            ..Default::default()
        });
        login_panel.add(&field_input)?;
    }

    let login_button = GlassButton::new(ButtonProps {
        text: "Login".to_string(),
        position: Position::new(0, 320),
        size: Size::new(320, 50)?,
        effect: Some(GlassTheme::colorful((100, 150, 255))?),
        hover_effect: Some(GlassTheme::frosted()),
        font_size: Some(16),
        text_color: Some((255, 255, 255).into()),
        on_click: Some(Rc::new(|_event| println!("Logging in..."))),
        ..Default::default()
    });
    login_panel.add(&login_button)?;

    let forgot_link = GlassLabel::new(LabelProps {
        text: "Forgot password?".to_string(),
        position: Position::new(0, 380),
        size: Size::new(320, 25)?,
        font_size: Some(11),
        text_color: Some((100, 150, 255).into()),
        align: TextAlign::Center,
        ..Default::default()
    });
    login_panel.add(&forgot_link)?;

    let register_panel = GlassPanel::new(PanelProps {
        position: Position::new(50, 520),
        size: Size::new(400, 60)?,
        effect: Some(GlassTheme::dark()),
        padding: 15,
        ..Default::default()
    });

    let register_label = GlassLabel::new(LabelProps {
        text: "Don't have an account?".to_string(),
        position: Position::new(0, 0),
        size: Size::new(200, 30)?,
        font_size: Some(12),
        text_color: Some((220, 220, 230).into()),
        ..Default::default()
    });
    register_panel.add(&register_label)?;

    let register_button = GlassButton::new(ButtonProps {
        text: "Sign Up".to_string(),
        position: Position::new(220, 0),
        size: Size::new(110, 30)?,
        effect: Some(GlassTheme::colorful((200, 100, 255))?),
        font_size: Some(12),
        text_color: Some((255, 255, 255).into()),
        on_click: Some(Rc::new(|_event| println!("Opening registration..."))),
        ..Default::default()
    });
    register_panel.add(&register_button)?;

    // login_panel is already attached by center_component
    window.add(&register_panel)?;

    Ok(window)
}

fn create_dashboard() -> Result<Window> {
    let window = Window::new(WindowProps {
        title: "GrandLight Dashboard".to_string(),
        size: Size::new(1200, 800)?,
        background_gradient: vec![
            "#0F2027".to_string(),
            "#203A43".to_string(),
            "#2C5364".to_string(),
        ],
        ..Default::default()
    })?;

    let header = GlassPanel::new(PanelProps {
        position: Position::new(20, 20),
        size: Size::new(1160, 80)?,
        effect: Some(GlassTheme::dark()),
        padding: 20,
        ..Default::default()
    });

    let header_title = GlassLabel::new(LabelProps {
        text: "Dashboard".to_string(),
        position: Position::new(0, 0),
        size: Size::new(400, 40)?,
        font_size: Some(24),
        style: TextStyle::BOLD,
        text_color: Some((255, 255, 255).into()),
        ..Default::default()
    });
    header.add(&header_title)?;

    let stat_cards: [(&str, &str, (i32, i32, i32)); 4] = [
        ("Total Users", "12,543", (100, 150, 255)),
        ("Revenue", "$45,231", (100, 200, 130)),
        ("Growth", "+23.5%", (255, 180, 100)),
        ("Rating", "4.8/5.0", (255, 150, 200)),
    ];

    for (i, (title, value, color)) in stat_cards.into_iter().enumerate() {
        let card = GlassPanel::new(PanelProps {
            position: Position::new(20 + i as i32 * 295, 120),
            size: Size::new(280, 140)?,
            effect: Some(GlassTheme::colorful(color)?),
            padding: 20,
            ..Default::default()
        });

        let card_title = GlassLabel::new(LabelProps {
            text: title.to_string(),
            position: Position::new(0, 0),
            size: Size::new(240, 30)?,
            font_size: Some(14),
            text_color: Some((255, 255, 255, 200).try_into()?),
            ..Default::default()
        });
        card.add(&card_title)?;

        let card_value = GlassLabel::new(LabelProps {
            text: value.to_string(),
            position: Position::new(0, 50),
            size: Size::new(240, 60)?,
            font_size: Some(32),
            style: TextStyle::BOLD,
            text_color: Some((255, 255, 255).into()),
            ..Default::default()
        });
        card.add(&card_value)?;

        window.add(&card)?;
    }

    window.add(&header)?;

    Ok(window)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("\n{}", "=".repeat(70));
    println!("  GrandLight Advanced Examples");
    println!("  Login Form & Dashboard Demos");
    println!("{}\n", "=".repeat(70));

    println!("Creating login form...");
    let login_app = create_login_form()?;
    println!(
        "   Login form ready: {}x{}",
        login_app.size().width,
        login_app.size().height
    );
    println!("   Components: {}", grandlight::component_count(&login_app));

    println!("\nCreating dashboard...");
    let dashboard_app = create_dashboard()?;
    println!(
        "   Dashboard ready: {}x{}",
        dashboard_app.size().width,
        dashboard_app.size().height
    );
    println!(
        "   Components: {}",
        grandlight::component_count(&dashboard_app)
    );

    println!("\nTo run: login_app.run() or dashboard_app.run()");
    println!("(Full rendering coming in future releases)\n");

    Ok(())
}
