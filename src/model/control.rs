#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    running: bool,
    sent_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Running,
    Stopped,
    Ok,
}

impl LogLevel {
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "[INFO]",
            LogLevel::Running => "[RUNNING]",
            LogLevel::Stopped => "[STOPPED]",
            LogLevel::Ok => "[OK]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: LogLevel,
    pub text: String,
}

impl LogLine {
    fn new(level: LogLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for LogLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.level.tag(), self.text)
    }
}

impl ControlState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn sent_count(&self) -> u64 {
        self.sent_count
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Counts one simulated PACS send. Does nothing while stopped.
    pub fn send_one(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.sent_count = self.sent_count.saturating_add(1);
        true
    }

    pub fn status_label(&self) -> &'static str {
        if self.running {
            "Server berjalan"
        } else {
            "Server berhenti"
        }
    }

    /// Rebuilt from the current state on every call; nothing accumulates.
    pub fn log_lines(&self) -> Vec<LogLine> {
        let mut lines = vec![LogLine::new(LogLevel::Info, "Emulator siap digunakan.")];

        lines.push(if self.running {
            LogLine::new(LogLevel::Running, "Menunggu studi untuk dikirim...")
        } else {
            LogLine::new(LogLevel::Stopped, "Server tidak aktif.")
        });

        if self.sent_count > 0 {
            lines.push(LogLine::new(
                LogLevel::Ok,
                format!("{} gambar berhasil dikirim ke PACS.", self.sent_count),
            ));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(state: &ControlState) -> Vec<String> {
        state.log_lines().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn defaults_to_stopped_and_zero() {
        let state = ControlState::default();
        assert!(!state.is_running());
        assert_eq!(state.sent_count(), 0);
    }

    #[test]
    fn send_while_stopped_is_noop() {
        let mut state = ControlState::default();
        assert!(!state.send_one());
        assert!(!state.send_one());
        assert_eq!(state.sent_count(), 0);
    }

    #[test]
    fn send_counts_only_while_running() {
        let mut state = ControlState::default();
        state.start();
        assert!(state.send_one());
        assert!(state.send_one());
        state.stop();
        assert!(!state.send_one());
        assert_eq!(state.sent_count(), 2);
    }

    #[test]
    fn restart_keeps_counter() {
        let mut state = ControlState::default();
        state.start();
        state.send_one();
        state.stop();
        state.start();
        assert!(state.is_running());
        assert_eq!(state.sent_count(), 1);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut state = ControlState::default();
        state.start();
        state.start();
        assert!(state.is_running());
        state.stop();
        state.stop();
        assert!(!state.is_running());
    }

    #[test]
    fn log_is_derived_from_state() {
        let mut state = ControlState::default();
        assert_eq!(
            rendered(&state),
            ["[INFO] Emulator siap digunakan.", "[STOPPED] Server tidak aktif."]
        );

        state.start();
        state.send_one();
        state.send_one();
        state.send_one();
        assert_eq!(
            rendered(&state),
            [
                "[INFO] Emulator siap digunakan.",
                "[RUNNING] Menunggu studi untuk dikirim...",
                "[OK] 3 gambar berhasil dikirim ke PACS.",
            ]
        );

        state.stop();
        assert_eq!(rendered(&state).len(), 3);
        assert_eq!(state.status_label(), "Server berhenti");
    }
}
