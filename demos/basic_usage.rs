//! Complete GrandLight demo application.
//!
//! Builds a full-featured glassmorphic scene using every component
//! kind, then prints the tree summary the walker produces.

use std::io;
use std::rc::Rc;

use grandlight::theme::GlassTheme;
use grandlight::{
    ButtonProps, Component, Container, GlassButton, GlassInput, GlassLabel, GlassPanel,
    InputProps, LabelProps, PanelProps, Position, Result, Size, TextAlign, TextStyle, Window,
    WindowProps,
};

fn create_demo_app() -> Result<Window> {
    // Main window with a gradient background
    let window = Window::new(WindowProps {
        title: "GrandLight Demo - Glassmorphism UI Library".to_string(),
        size: Size::new(900, 700)?,
        background_gradient: vec![
            "#667eea".to_string(),
            "#764ba2".to_string(),
            "#f093fb".to_string(),
            "#4facfe".to_string(),
        ],
        fps: Some(60),
        ..Default::default()
    })?;

    let main_panel = GlassPanel::new(PanelProps {
        size: Size::new(600, 500)?,
        effect: Some(GlassTheme::light()),
        padding: 30,
        ..Default::default()
    });
    window.center_component(&main_panel)?;

    let title = GlassLabel::new(LabelProps {
        text: "Welcome to GrandLight".to_string(),
        position: Position::new(0, 0),
        size: Size::new(540, 60)?,
        font_size: Some(32),
        style: TextStyle::BOLD,
        text_color: Some((50, 50, 70).into()),
        align: TextAlign::Center,
        background: true,
        effect: Some(GlassTheme::frosted()),
        ..Default::default()
    });
    main_panel.add(&title)?;

    let subtitle = GlassLabel::new(LabelProps {
        text: "A Modern Glassmorphism GUI Library for Rust".to_string(),
        position: Position::new(0, 80),
        size: Size::new(540, 40)?,
        font_size: Some(16),
        text_color: Some((80, 80, 100).into()),
        align: TextAlign::Center,
        ..Default::default()
    });
    main_panel.add(&subtitle)?;

    let name_input = GlassInput::new(InputProps {
        placeholder: "Enter your name...".to_string(),
        position: Position::new(0, 150),
        size: Size::new(540, 50)?,
        effect: Some(GlassTheme::light()),
        focus_effect: Some(GlassTheme::frosted()),
        font_size: Some(16),
        ..Default::default()
    });
    main_panel.add(&name_input)?;

    // A row of themed buttons
    let button_y = 230;
    let buttons: [(&str, (i32, i32, i32), &str); 3] = [
        ("Get Started", (100, 150, 255), "Getting started with GrandLight!"),
        ("Documentation", (100, 200, 130), "Opening documentation..."),
        ("Examples", (255, 180, 100), "Loading examples..."),
    ];
    for (i, (text, color, message)) in buttons.into_iter().enumerate() {
        let button = GlassButton::new(ButtonProps {
            text: text.to_string(),
            position: Position::new(i as i32 * 185, button_y),
            size: Size::new(170, 50)?,
            effect: Some(GlassTheme::colorful(color)?),
            hover_effect: Some(GlassTheme::frosted()),
            font_size: Some(15),
            on_click: Some(Rc::new(move |_event| println!("{message}"))),
            ..Default::default()
        });
        main_panel.add(&button)?;
    }

    // Feature showcase panel
    let features_panel = GlassPanel::new(PanelProps {
        position: Position::new(0, 310),
        size: Size::new(540, 150)?,
        effect: Some(GlassTheme::dark()),
        padding: 20,
        ..Default::default()
    });
    main_panel.add(&features_panel)?;

    let features = [
        "Glassmorphism Design",
        "Multiple Themes",
        "High Performance",
        "Easy to Use",
        "Beautiful Effects",
        "Modern Rust",
    ];
    for (i, feature) in features.into_iter().enumerate() {
        let row = (i / 3) as i32;
        let col = (i % 3) as i32;
        let feature_label = GlassLabel::new(LabelProps {
            text: feature.to_string(),
            position: Position::new(col * 180, row * 50),
            size: Size::new(170, 40)?,
            font_size: Some(13),
            text_color: Some((255, 255, 255, 230).try_into()?),
            ..Default::default()
        });
        features_panel.add(&feature_label)?;
    }

    let footer = GlassLabel::new(LabelProps {
        text: "Created by Rheehose (Rhee Creative) © 2008-2026".to_string(),
        position: Position::new(0, 450),
        size: Size::new(540, 30)?,
        font_size: Some(11),
        text_color: Some((100, 100, 120, 200).try_into()?),
        align: TextAlign::Center,
        ..Default::default()
    });
    main_panel.add(&footer)?;

    Ok(window)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("\n{}", "=".repeat(70));
    println!("  GrandLight Demo - Glassmorphism GUI Library");
    println!("{}\n", "=".repeat(70));

    let app = create_demo_app()?;

    println!("Application ready!\n");
    println!("Application Stats:");
    println!("  Window Size: {}x{}", app.size().width, app.size().height);
    println!("  Total Components: {}", grandlight::component_count(&app));
    println!("  Target FPS: {}", app.fps());

    println!("\nComponent Hierarchy:");
    grandlight::print_hierarchy(&app, &mut io::stdout().lock())?;

    println!("\nTo run the actual window, call app.run()");
    println!("(Full rendering implementation coming soon!)\n");
    app.run();

    Ok(())
}
