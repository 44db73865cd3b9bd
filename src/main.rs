#[macro_use]
extern crate log;

use weather_station::{build_config, demo::Demo, stdout_output, MasterConfig};

fn init_logger(conf: &MasterConfig) {
    env_logger::Builder::new()
        .filter_level(conf.log_level)
        .parse_default_env()
        .init();
}

fn main() {
    let conf = match build_config() {
        Ok(conf) => conf,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            std::process::exit(1);
        }
    };
    if conf.happy_exit {
        return;
    }
    init_logger(&conf);
    info!(
        "starting weather station with displays: {}",
        conf.displays
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<&str>>()
            .join(", ")
    );
    let demo = Demo::new(&conf, &stdout_output());
    if let Err(e) = demo.run() {
        error!("weather station stopped: {}", e);
        std::process::exit(1);
    }
    info!("done");
}
