/// Bounded in-session event feed shown beside the chat. Mirrors the file
/// log for the handful of events worth surfacing in the UI.
#[derive(Debug, Default)]
pub struct EventLog {
    pub entries: Vec<String>,
}

const MAX_ENTRIES: usize = 200;

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        log::info!("{entry}");
        self.entries.push(entry);
        if self.entries.len() > MAX_ENTRIES {
            self.entries.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_is_bounded() {
        let mut log = EventLog::new();
        for i in 0..(MAX_ENTRIES + 10) {
            log.add(format!("entry {i}"));
        }
        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0], "entry 10");
    }
}
