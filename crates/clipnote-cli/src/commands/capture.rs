use anyhow::Result;
use clipnote_browser::{ChromeFinder, ChromeLauncher, PageSnapshotter, ProfileManager};
use clipnote_core::capture::CaptureWriter;
use std::path::PathBuf;
use std::time::Duration;

/// Kill a process by PID (cross-platform)
fn kill_process_by_pid(pid: u32) {
    #[cfg(unix)]
    {
        use std::process::Command;
        let _ = Command::new("kill").arg(pid.to_string()).output();
    }

    #[cfg(windows)]
    {
        use std::process::Command;
        let _ = Command::new("taskkill")
            .args(["/PID", &pid.to_string(), "/F"])
            .output();
    }
}

pub fn execute(
    url: &str,
    output: Option<PathBuf>,
    chrome_path: Option<PathBuf>,
    profile: Option<String>,
    settle_ms: u64,
) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(run(url, output, chrome_path, profile, settle_ms));

    // The keypress reader may still be blocked on stdin; don't wait for it.
    runtime.shutdown_timeout(Duration::from_millis(100));

    result
}

async fn run(
    url: &str,
    output: Option<PathBuf>,
    chrome_path: Option<PathBuf>,
    profile: Option<String>,
    settle_ms: u64,
) -> Result<()> {
    println!("🔍 Locating Chrome...");
    let finder = ChromeFinder::new(chrome_path);
    let chrome_binary = finder.find()?;
    println!("✅ Found Chrome at: {}", chrome_binary.display());

    let profile_manager = if let Some(profile_name) = profile {
        let profile_path = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?
            .join(".clipnote")
            .join("profiles")
            .join(profile_name);

        println!("📁 Using profile: {}", profile_path.display());
        ProfileManager::persistent(profile_path)?
    } else {
        println!("📁 Using temporary profile");
        ProfileManager::temporary()?
    };

    let launcher = ChromeLauncher::new(
        chrome_binary,
        profile_manager.path().to_path_buf(),
        Some(url.to_string()),
    );
    let debugging_port = launcher.debugging_port();

    println!("🚀 Launching Chrome at {}", url);
    let mut chrome_process = launcher.launch()?;
    let chrome_pid = chrome_process.id();

    let snapshotter = PageSnapshotter::connect(debugging_port, Some("/watch")).await?;

    println!();
    println!("Seek to the moment you want to clip, then:");
    println!("  c) Clip now (Chrome stays open)");
    println!("  a) Abort - kill Chrome, no capture");
    println!();

    // Non-blocking keypress read, raced against Chrome exiting on its own.
    let input_task = tokio::task::spawn_blocking(move || {
        let term = console::Term::stdout();
        term.read_char()
    });
    let wait_task = tokio::task::spawn_blocking(move || chrome_process.wait());

    let key = tokio::select! {
        key = input_task => Some(key??),
        status = wait_task => {
            let status = status??;
            println!("🛑 Chrome closed (exit code: {})", status.code().unwrap_or(-1));
            None
        }
    };

    match key {
        Some('c') => {}
        Some(_) => {
            println!("🛑 Aborted, killing Chrome");
            snapshotter.close();
            kill_process_by_pid(chrome_pid);
            return Ok(());
        }
        None => {
            snapshotter.close();
            anyhow::bail!("Chrome closed before anything was captured");
        }
    }

    // Two-phase read: trigger the description expansion, wait out the
    // settle delay, then snapshot. An insufficient delay only costs
    // chapters, never the clip.
    if snapshotter.request_expand().await? {
        snapshotter.await_settle(Duration::from_millis(settle_ms)).await;
    }

    let capture = snapshotter.snapshot().await?;
    snapshotter.close();

    if let Some(output_path) = output {
        CaptureWriter::to_file(&capture, &output_path)?;
        println!("💾 Wrote capture to {}", output_path.display());
    } else {
        println!("{}", CaptureWriter::to_string(&capture)?);
    }

    Ok(())
}
