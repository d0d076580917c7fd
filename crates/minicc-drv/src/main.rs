use minicc_drv::{parse_args, run};

fn main() {
    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        },
    };

    if let Err(e) = run(&config) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
