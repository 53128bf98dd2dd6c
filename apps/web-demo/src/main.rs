//! Headless walk through the demo gallery.
//!
//! Drags the demo slider across a recorded surface and logs what the page
//! would show. Run with `RUST_LOG=debug cargo run -p web-demo` for every step.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use thumbslider_testing::SliderRobot;
    use web_demo::gallery;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = gallery::demo_config()
        .on_change(|value| log::debug!("photo {value}"))
        .on_start(|value| log::info!("drag started at {value}"))
        .on_end(|value| log::info!("photo {value} selected"));
    let mut robot = match SliderRobot::new(20.0, 320.0, config) {
        Ok(robot) => robot,
        Err(err) => {
            log::error!("invalid demo config: {err}");
            std::process::exit(1);
        }
    };

    robot.drag_in_steps(30.0, 310.0, 28);
    log::info!("tooltip shows {:?}", robot.surface().tooltip_content());
    robot.drag_in_steps(310.0, 120.0, 19);
    log::info!("tooltip shows {:?}", robot.surface().tooltip_content());
}

#[cfg(target_arch = "wasm32")]
fn main() {}
