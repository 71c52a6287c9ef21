#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional callback; a reporter without one discards them.
///
/// The callback must be `Sync` because rows are computed on worker threads, each reporting its
/// own `TaskIncrement`.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `f` between a `PhaseStart` and a `PhaseFinish` event.
    ///
    /// `PhaseFinish` is reported whether or not `f` succeeds, so a renderer never keeps a phase
    /// open after an error.
    pub fn phase<T>(&self, name: &'static str, f: impl FnOnce() -> T) -> T {
        self.report(Progress::PhaseStart { name });
        let result = f();
        self.report(Progress::PhaseFinish);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn label(event: &Progress) -> String {
        match event {
            Progress::PhaseStart { name } => format!("start:{}", name),
            Progress::PhaseFinish => "finish".to_string(),
            Progress::TaskStart { total_steps } => format!("task:{}", total_steps),
            Progress::TaskIncrement => "inc".to_string(),
            Progress::TaskFinish => "task-done".to_string(),
            Progress::Message(m) => format!("msg:{}", m),
        }
    }

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::TaskIncrement);
        assert_eq!(reporter.phase("Computing Features", || 3), 3);
    }

    #[test]
    fn phase_wraps_closure_in_start_and_finish() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|e| {
            events.lock().unwrap().push(label(&e));
        }));

        let result: Result<(), &str> = reporter.phase("Loading Dataset", || {
            reporter.report(Progress::Message("reading".to_string()));
            Err("boom")
        });
        assert!(result.is_err());
        drop(reporter);

        assert_eq!(
            events.into_inner().unwrap(),
            vec!["start:Loading Dataset", "msg:reading", "finish"]
        );
    }
}
