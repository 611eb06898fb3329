use std::{
    env, fmt,
    path::{Path, PathBuf},
};

use crate::sampler::{DEFAULT_SAMPLE_COUNT, Interval};

/// The formula sampled by the compiled-in task.
pub const DEFAULT_EXPRESSION: &str = "-cos(x) * cos(pi) * exp(-(x - pi) ** 2)";
/// The variable the compiled-in task is sampled in.
pub const DEFAULT_VARIABLE: &str = "x";
/// The interval of the compiled-in task.
pub const DEFAULT_INTERVAL: Interval = Interval::new(-100.0, 100.0);
/// Directory, relative to the working directory, receiving the artifacts.
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Base filename shared by the plot and the data document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskName(String);

impl TaskName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Derives the name from the running program: the file stem of the path
    /// it was invoked as, falling back to the executable path and then to the
    /// crate name.
    #[must_use]
    pub fn from_program() -> Self {
        env::args_os().next()
                      .map(PathBuf::from)
                      .or_else(|| env::current_exe().ok())
                      .as_deref()
                      .and_then(stem)
                      .map_or_else(|| Self::new(env!("CARGO_PKG_NAME")), Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn stem(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
}

/// Everything one run needs: what to sample, where, and where to write.
///
/// Built once at startup and passed by reference to every stage.
/// [`Task::default`] is the compiled-in task; the `with_*` methods build
/// variations of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub expression:  String,
    pub variable:    String,
    pub interval:    Interval,
    pub count:       usize,
    pub results_dir: PathBuf,
    pub name:        TaskName,
}

impl Default for Task {
    fn default() -> Self {
        Self { expression:  DEFAULT_EXPRESSION.to_string(),
               variable:    DEFAULT_VARIABLE.to_string(),
               interval:    DEFAULT_INTERVAL,
               count:       DEFAULT_SAMPLE_COUNT,
               results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
               name:        TaskName::from_program(), }
    }
}

impl Task {
    #[must_use]
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = expression.into();
        self
    }

    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: impl Into<Interval>) -> Self {
        self.interval = interval.into();
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_results_dir(mut self, results_dir: impl Into<PathBuf>) -> Self {
        self.results_dir = results_dir.into();
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = TaskName::new(name);
        self
    }

    /// Where the plot of this task is written.
    #[must_use]
    pub fn plot_path(&self) -> PathBuf {
        artifact_path(&self.results_dir, &self.name, "png")
    }

    /// Where the data document of this task is written.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        artifact_path(&self.results_dir, &self.name, "xml")
    }
}

/// `<dir>/<name>.<extension>`
pub(crate) fn artifact_path(dir: &Path, name: &TaskName, extension: &str) -> PathBuf {
    dir.join(format!("{name}.{extension}"))
}
