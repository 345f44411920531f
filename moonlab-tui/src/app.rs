//! Application state: single-owner, main-thread only.
//!
//! The dataset is loaded once before the state is built and never mutated.
//! Every selection change re-runs the pipeline and caches its output here.

use chrono::NaiveDate;

use moonlab_core::{
    render_pass, ChartError, ChartSpec, ChartStyle, DashboardConfig, Dataset, Record, Selection,
    SelectionOptions,
};

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tickers,
    Phases,
    Chart,
    Table,
}

impl Focus {
    pub fn index(self) -> usize {
        match self {
            Focus::Tickers => 0,
            Focus::Phases => 1,
            Focus::Chart => 2,
            Focus::Table => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Focus::Tickers),
            1 => Some(Focus::Phases),
            2 => Some(Focus::Chart),
            3 => Some(Focus::Table),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Tickers => "Tickers",
            Focus::Phases => "Phases",
            Focus::Chart => "Chart",
            Focus::Table => "Table",
        }
    }

    pub fn next(self) -> Focus {
        Focus::from_index((self.index() + 1) % 4).unwrap_or(Focus::Tickers)
    }

    pub fn prev(self) -> Focus {
        Focus::from_index((self.index() + 3) % 4).unwrap_or(Focus::Tickers)
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Cursor over one multiselect option list.
#[derive(Debug, Clone, Default)]
pub struct ListCursor {
    pub row: usize,
}

impl ListCursor {
    pub fn down(&mut self, len: usize) {
        if len > 0 && self.row + 1 < len {
            self.row += 1;
        }
    }

    pub fn up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub focus: Focus,
    pub show_help: bool,

    // Immutable inputs
    pub dataset: Dataset,
    pub options: SelectionOptions,
    pub style: ChartStyle,
    pub page_title: String,

    // Selection
    pub selection: Selection,
    pub ticker_cursor: ListCursor,
    pub phase_cursor: ListCursor,

    // Derived by the last render pass
    pub filtered: Vec<usize>,
    pub chart: Result<ChartSpec, ChartError>,

    // Chart hover cursor: index into `ChartSpec::hover_dates`.
    pub hover: Option<usize>,

    // Table expander
    pub table_expanded: bool,
    pub table_scroll: usize,

    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(dataset: Dataset, config: &DashboardConfig) -> Self {
        let options = SelectionOptions::from_dataset(&dataset);
        let selection = Selection::with_defaults(&options, &config.default_tickers);
        let mut app = Self {
            running: true,
            focus: Focus::Tickers,
            show_help: false,
            dataset,
            options,
            style: config.chart_style(),
            page_title: config.page_title.clone(),
            selection,
            ticker_cursor: ListCursor::default(),
            phase_cursor: ListCursor::default(),
            filtered: Vec::new(),
            chart: Err(ChartError::EmptyResult),
            hover: None,
            table_expanded: false,
            table_scroll: 0,
            status_message: None,
        };
        app.refresh();
        app
    }

    /// Re-run filter and chart build for the current selection.
    pub fn refresh(&mut self) {
        let (filtered, chart) = {
            let pass = render_pass(&self.dataset, &self.selection, &self.style);
            (pass.view.indices().to_vec(), pass.chart)
        };
        self.filtered = filtered;
        self.chart = chart;

        let stops = self.hover_dates().len();
        self.hover = match self.hover {
            Some(i) if stops > 0 => Some(i.min(stops - 1)),
            _ => None,
        };
        self.table_scroll = self
            .table_scroll
            .min(self.filtered.len().saturating_sub(1));

        match &self.chart {
            Ok(_) => self.set_status(format!("{} rows match", self.filtered.len())),
            Err(e) => self.set_warning(e.to_string()),
        }
    }

    pub fn filtered_records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.filtered
            .iter()
            .filter_map(move |&i| self.dataset.get(i))
    }

    pub fn toggle_ticker_at_cursor(&mut self) {
        if let Some(ticker) = self.options.tickers.get(self.ticker_cursor.row).cloned() {
            self.selection.toggle_ticker(&ticker);
            self.refresh();
        }
    }

    pub fn toggle_phase_at_cursor(&mut self) {
        if let Some(phase) = self.options.phases.get(self.phase_cursor.row).cloned() {
            self.selection.toggle_phase(&phase);
            self.refresh();
        }
    }

    pub fn hover_dates(&self) -> Vec<NaiveDate> {
        match &self.chart {
            Ok(spec) => spec.hover_dates(),
            Err(_) => Vec::new(),
        }
    }

    pub fn hover_date(&self) -> Option<NaiveDate> {
        self.hover.and_then(|i| self.hover_dates().get(i).copied())
    }

    /// Move the hover cursor by `step` stops, starting at the first or last
    /// stop when no cursor is shown yet.
    pub fn move_hover(&mut self, step: isize) {
        let stops = self.hover_dates().len();
        if stops == 0 {
            self.hover = None;
            return;
        }
        let next = match self.hover {
            None if step < 0 => stops - 1,
            None => 0,
            Some(i) => i.saturating_add_signed(step).min(stops - 1),
        };
        self.hover = Some(next);
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
