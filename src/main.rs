//! Demo binary. All the real logic lives in the library; this just sets up
//! logging and hands off to the platform entry point.

#[cfg(target_os = "windows")]
mod windows_main;

fn main() {
    if let Err(e) = simple_logger::init_with_level(log::Level::Debug) {
        eprintln!("logger init failed: {e}");
    }

    #[cfg(target_os = "windows")]
    windows_main::run();

    #[cfg(not(target_os = "windows"))]
    {
        eprintln!("alertbox: the demo needs a Windows desktop to run on");
        std::process::exit(1);
    }
}
