//! Terminal progress display for the generation phases

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

/// Stage of a single pattern job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Growing the spanning tree
    Grow,
    /// Shading the depth map
    Render,
    /// Encoding and writing the PNG
    Export,
}

impl Phase {
    /// Every phase in execution order
    pub const ALL: [Self; 3] = [Self::Grow, Self::Render, Self::Export];

    /// Short label shown next to the bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grow => "growing tree",
            Self::Render => "rendering",
            Self::Export => "writing png",
        }
    }
}

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!("{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar stepping through the phases of one job
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a visible bar labelled with the output name
    pub fn new(name: &str) -> Self {
        let bar = ProgressBar::new(Phase::ALL.len() as u64);
        bar.set_style(PHASE_STYLE.clone());
        bar.set_prefix(name.to_string());
        Self { bar }
    }

    /// Create a bar that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Announce the phase about to run
    pub fn start(&self, phase: Phase) {
        self.bar.set_message(phase.label());
    }

    /// Mark a phase as done
    pub fn complete(&self, phase: Phase) {
        self.bar.inc(1);
        self.bar.set_message(format!("{} done", phase.label()));
    }

    /// Number of phases completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar once the job is done
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
