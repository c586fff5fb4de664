//! Windows entry point for the demo binary.
//!
//! Walks through the dialog variants one after another so every button set,
//! badge and default-button combination can be tried by hand.

use windows::Win32::Foundation::HWND;

use alertbox::model::DialogFlags;
use alertbox::platform::windows::dialog;

/// Main entry point for Windows.
pub fn run() {
    if let Err(e) = run_demo() {
        eprintln!("alertbox error: {}", e);
        std::process::exit(1);
    }
}

fn run_demo() -> windows::core::Result<()> {
    let owner: Option<HWND> = None;

    let result = dialog::information(owner, "All files were copied.", "Update complete")?;
    log::info!("information -> {result:?}");

    let result = dialog::show_message(
        owner,
        "A file with the same name already exists in the destination folder. \
         Replacing it will overwrite its contents.",
        "Replace file?",
        DialogFlags::OK_CANCEL | DialogFlags::ICON_WARNING | DialogFlags::DEFAULT_SECOND,
    )?;
    log::info!("ok/cancel with cancel preselected -> {result:?}");

    let result = dialog::critical(
        owner,
        "The disk is full. Free some space and try again.",
        "Write failed",
    )?;
    log::info!("critical -> {result:?}");

    let result = dialog::show_message(
        owner,
        "Unsaved changes will be lost. Quit anyway?",
        "Quit",
        DialogFlags::YES_NO | DialogFlags::ICON_ERROR | DialogFlags::TOPMOST,
    )?;
    log::info!("topmost yes/no -> {result:?}");

    Ok(())
}
