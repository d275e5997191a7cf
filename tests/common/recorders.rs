//! Recording guard collaborators

use parking_lot::Mutex;
use squadboard::auth::Notice;
use squadboard::auth::guard::{Navigator, Notifier};

/// Remembers every redirect
#[derive(Default)]
pub struct RecordingNavigator {
    pub redirects: Mutex<Vec<(String, Option<String>)>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, to: &str, return_to: Option<&str>) {
        self.redirects
            .lock()
            .push((to.to_string(), return_to.map(str::to_string)));
    }
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<(String, Option<String>)> {
        self.redirects.lock().last().cloned()
    }
}

/// Remembers every notice
#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().push(notice.clone());
    }
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.notices.lock().len()
    }
}
