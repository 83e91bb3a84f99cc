use isoband::prelude::*;

/// Scripted walkthrough of the band controller on a headless surface.
///
/// Exercises the three center sources in turn — named location, map click,
/// map-center fallback — the way an interactive session would, and prints
/// the resulting state after each run.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    println!("🗺️ Isoband Headless Demo");
    println!("========================");
    log::info!("starting headless walkthrough");

    let surface = HeadlessSurface::new(constants::DEFAULT_CENTER, constants::DEFAULT_ZOOM);
    let mut app = IsobandApp::new(surface);

    // 1. Named location, distance mode.
    app.controls_mut().location = "Eiffel Tower".to_string();
    app.handle_event(AppEvent::ModeChanged(TravelMode::Distance))
        .await?;
    app.controls_mut().distance_value = "5".to_string();
    app.controls_mut().num_bands = "5".to_string();
    app.handle_event(AppEvent::GeneratePressed).await?;
    print_state("Named location, 5 km in 5 bands", &app);

    // 2. Clicked point, time mode.
    app.handle_event(AppEvent::MapClick(LatLng::new(48.8606, 2.3376)))
        .await?;
    app.handle_event(AppEvent::ModeChanged(TravelMode::Time)).await?;
    app.controls_mut().time_value = "30".to_string();
    app.controls_mut().num_bands = "3".to_string();
    app.handle_event(AppEvent::GeneratePressed).await?;
    print_state("Clicked point, 30 min in 3 bands", &app);

    // 3. Unknown name falls back to the map center with an explanation.
    app.controls_mut().location = "Atlantis".to_string();
    app.handle_event(AppEvent::GeneratePressed).await?;
    print_state("Unrecognized name fallback", &app);

    // 4. Invalid input is rejected without touching the drawn state.
    app.controls_mut().num_bands = "11".to_string();
    app.handle_event(AppEvent::GeneratePressed).await?;
    print_state("Rejected band count", &app);

    println!("\n✅ Walkthrough complete.");
    Ok(())
}

fn print_state(title: &str, app: &IsobandApp<HeadlessSurface>) {
    let surface = app.surface();
    let controls = app.controls();

    println!("\n📍 {}", title);
    println!(
        "   View: {:.4}, {:.4} at zoom {:.1}",
        surface.center().lat,
        surface.center().lng,
        surface.zoom()
    );
    println!(
        "   Layers: {} ({} band polygons)",
        surface.layer_count(),
        surface.polygons_in_order().len()
    );
    for row in &controls.legend {
        println!("   {} {}", row.color, row.label);
    }
    if let Some(status) = &controls.status {
        let tag = match status.level {
            StatusLevel::Info => "info",
            StatusLevel::Error => "error",
        };
        println!("   [{}] {}", tag, status.text);
    }
}
