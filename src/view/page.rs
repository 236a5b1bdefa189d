//! Page view state: every region the controller drives

use crate::input::DropZone;
use crate::view::counter::CounterAnimation;
use crate::view::ids;
use crate::view::jobs::JobResultsView;
use crate::view::results::ResultsPanel;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub disabled: bool,
    pub label_visible: bool,
    pub loader_visible: bool,
}

impl Default for ButtonState {
    fn default() -> Self {
        Self {
            disabled: false,
            label_visible: true,
            loader_visible: false,
        }
    }
}

/// Smooth scroll of an element into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub element_id: &'static str,
}

/// Everything needed to draw the whole page at one instant.
#[derive(Debug, Clone, Copy)]
pub struct PageSnapshot<'a> {
    pub view: &'a PageView,
    pub roles: &'a [String],
    pub selected_role: &'a str,
    pub location: &'a str,
}

#[derive(Debug)]
pub struct PageView {
    pub drop_zone: DropZone,
    analyze_button: ButtonState,
    results_visible: bool,
    results: Option<ResultsPanel>,
    counter: CounterAnimation,
    search_button_disabled: bool,
    job_loader_visible: bool,
    job_results: JobResultsView,
    alert: Option<String>,
    scroll_request: Option<ScrollRequest>,
}

impl PageView {
    pub fn new(counter_step: Duration) -> Self {
        Self {
            drop_zone: DropZone::new(),
            analyze_button: ButtonState::default(),
            results_visible: false,
            results: None,
            counter: CounterAnimation::new(counter_step),
            search_button_disabled: false,
            job_loader_visible: false,
            job_results: JobResultsView::Empty,
            alert: None,
            scroll_request: None,
        }
    }

    /// Loading locks the analyze button and hides the results area;
    /// leaving it only restores the button.
    pub fn set_analysis_loading(&mut self, loading: bool) {
        if loading {
            self.analyze_button = ButtonState {
                disabled: true,
                label_visible: false,
                loader_visible: true,
            };
            self.results_visible = false;
        } else {
            self.analyze_button = ButtonState::default();
        }
    }

    /// Replace the results panel and restart the counter for it.
    pub fn show_results(&mut self, panel: ResultsPanel) {
        self.results_visible = true;
        self.counter.start(panel.match_percentage);
        self.results = Some(panel);
        self.scroll_request = Some(ScrollRequest {
            element_id: ids::RESULTS_AREA,
        });
    }

    pub fn set_job_search_loading(&mut self, loading: bool) {
        if loading {
            self.job_loader_visible = true;
            self.job_results = JobResultsView::Empty;
            self.search_button_disabled = true;
        } else {
            self.job_loader_visible = false;
            self.search_button_disabled = false;
        }
    }

    pub fn show_jobs(&mut self, jobs: JobResultsView) {
        self.job_results = jobs;
    }

    /// Raise a blocking alert. The driver shows it and clears it with
    /// [`PageView::take_alert`].
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    pub fn pending_alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.scroll_request.take()
    }

    pub fn analyze_button(&self) -> ButtonState {
        self.analyze_button
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn results(&self) -> Option<&ResultsPanel> {
        self.results.as_ref()
    }

    pub fn counter(&self) -> &CounterAnimation {
        &self.counter
    }

    pub fn counter_mut(&mut self) -> &mut CounterAnimation {
        &mut self.counter
    }

    pub fn search_button_disabled(&self) -> bool {
        self.search_button_disabled
    }

    pub fn job_loader_visible(&self) -> bool {
        self.job_loader_visible
    }

    pub fn job_results(&self) -> &JobResultsView {
        &self.job_results
    }
}
