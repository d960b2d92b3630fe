mod config;

use std::io;
use std::process::ExitCode;

use imgprobe::{EXIT_USAGE, ImageCodec, init_logging, run};
use log::debug;

fn main() -> ExitCode {
    let config = match config::parse_arguments(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let settings = config.to_probe_settings();
    if let Err(e) = init_logging(&settings) {
        eprintln!("{}", e);
        return ExitCode::from(EXIT_USAGE);
    }
    debug!("Configuration: {:?}", config);

    let codec = ImageCodec::new(settings.codec_settings());
    let code = run(&config.path, &codec, &mut io::stdout(), &mut io::stderr());
    ExitCode::from(code)
}
