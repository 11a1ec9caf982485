// On Windows, hide the console window for GUI applications
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

use polyline_editor::{init_logging, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("Polyline Editor {} (built {})", VERSION, BUILD_DATE);

    // Launch GTK Application
    let code = polyline_ui::gtk_app::main();
    if code != glib::ExitCode::SUCCESS {
        anyhow::bail!("GTK application exited with an error");
    }

    Ok(())
}
