//! External link opening as an injected capability.
use std::process::{Child, Command};

use bevy::prelude::*;

/// Opens a URL in a new browsing context.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str);
}

/// Production opener shelling out to the platform's URL handler.
pub struct ShellLinkOpener;

fn spawn_platform_opener(url: &str) -> std::io::Result<Child> {
    #[cfg(target_os = "macos")]
    return Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    return Command::new("cmd").args(["/C", "start", "", url]).spawn();
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    Command::new("xdg-open").arg(url).spawn()
}

/// Waits on the child from a detached thread. An unwaited child lingers as
/// a zombie on Unix until the game exits.
fn reap_detached(mut child: Child) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let _ = child.wait();
    })
}

impl LinkOpener for ShellLinkOpener {
    fn open(&self, url: &str) {
        match spawn_platform_opener(url) {
            Ok(child) => {
                let _ = reap_detached(child);
            }
            Err(err) => warn!("Failed to open {}: {}", url, err),
        }
    }
}

/// Resource holding the opener the UI hands link activations to.
#[derive(Resource)]
pub struct ActiveLinkOpener {
    opener: Box<dyn LinkOpener>,
}

impl ActiveLinkOpener {
    pub fn new(opener: Box<dyn LinkOpener>) -> Self {
        Self { opener }
    }

    pub fn open(&self, url: &str) {
        info!("Opening external link: {}", url);
        self.opener.open(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingOpener {
        opened: Arc<Mutex<Vec<String>>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) {
            self.opened.lock().unwrap().push(url.to_string());
        }
    }

    #[cfg(unix)]
    #[test]
    fn reaping_waits_for_the_child_to_exit() {
        let child = Command::new("true").spawn().expect("spawn should succeed");
        reap_detached(child).join().expect("reaper thread panicked");
    }

    #[test]
    fn delegates_to_the_injected_opener() {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let active = ActiveLinkOpener::new(Box::new(RecordingOpener {
            opened: Arc::clone(&opened),
        }));

        active.open("http://example.org");
        active.open("http://example.org/two");

        assert_eq!(
            *opened.lock().unwrap(),
            vec!["http://example.org", "http://example.org/two"]
        );
    }
}
