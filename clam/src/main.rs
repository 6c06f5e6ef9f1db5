use clam::app::commute_app::CommuteApp;
use clap::Parser;

fn main() {
    env_logger::init();
    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = CommuteApp::parse();
    match args.op.run() {
        Ok(_) => {}
        Err(e) => log::error!("{e}"),
    }
}
