//! Shared test fixtures for parser, writer and pipeline test modules.

use std::collections::HashMap;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "itermwarp-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }

    /// Names of every entry in the directory, sorted.
    pub fn entries(&self) -> Vec<String> {
        let mut names = fs::read_dir(&self.path)
            .expect("read fixture dir")
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        names.sort();
        names
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Build an XML `.itermcolors` document from `(slot, [r, g, b, a])` pairs.
pub fn itermcolors_xml(slots: &[(&str, [f64; 4])]) -> String {
    let mut body = String::new();
    for (slot, [r, g, b, a]) in slots {
        let _ = write!(
            body,
            "\t<key>{slot}</key>\n\t<dict>\n\
             \t\t<key>Alpha Component</key>\n\t\t<real>{a}</real>\n\
             \t\t<key>Blue Component</key>\n\t\t<real>{b}</real>\n\
             \t\t<key>Color Space</key>\n\t\t<string>sRGB</string>\n\
             \t\t<key>Green Component</key>\n\t\t<real>{g}</real>\n\
             \t\t<key>Red Component</key>\n\t\t<real>{r}</real>\n\
             \t</dict>\n"
        );
    }
    wrap_plist(&body)
}

/// Wrap a raw top-level dictionary body in the plist envelope.
pub fn wrap_plist(dict_body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n\
         <plist version=\"1.0\">\n<dict>\n{dict_body}</dict>\n</plist>\n"
    )
}

/// A full sixteen-color palette plus background, foreground and link colors.
pub fn full_palette() -> Vec<(String, [f64; 4])> {
    let mut slots = vec![
        ("Background Color".to_string(), [0.0, 0.0, 0.0, 1.0]),
        ("Foreground Color".to_string(), [1.0, 1.0, 1.0, 1.0]),
        ("Link Color".to_string(), [0.0, 0.5, 1.0, 1.0]),
        ("Cursor Color".to_string(), [0.9, 0.9, 0.9, 1.0]),
    ];
    for idx in 0..16u32 {
        let level = f64::from(idx) / 15.0;
        slots.push((format!("Ansi {idx} Color"), [level, 0.0, 1.0 - level, 1.0]));
    }
    slots
}

/// Borrow an owned palette as the slice shape `itermcolors_xml` expects.
pub fn as_slots(palette: &[(String, [f64; 4])]) -> Vec<(&str, [f64; 4])> {
    palette
        .iter()
        .map(|(name, rgba)| (name.as_str(), *rgba))
        .collect()
}

/// One tracing event recorded by [`capture_events`].
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Default)]
struct FieldRecorder(HashMap<String, String>);

impl Visit for FieldRecorder {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut recorder = FieldRecorder::default();
        event.record(&mut recorder);
        self.events.lock().expect("capture lock").push(CapturedEvent {
            level: *event.metadata().level(),
            fields: recorder.0,
        });
    }
}

/// Run `f` under a thread-local subscriber and return every event it emitted.
pub fn capture_events<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventCapture {
        events: Arc::clone(&events),
    });
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().expect("capture lock").clone();
    captured
}
