//! Chart and metric decoration
//!
//! The content panel is described as a `Page` of chart panels and metric
//! cards. The `Enhancer` gives every chart a period toolbar and every metric
//! a theme and label icon. Each element carries its own marker, so a pass
//! never touches an element twice, and the page's generation counter lets a
//! pass be skipped outright when nothing structural changed since the last.

use crate::themes::{Color, palette};

/// Time window offered by the chart toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartPeriod {
    #[default]
    Week,
    Month,
    Quarter,
}

impl ChartPeriod {
    pub const ALL: [ChartPeriod; 3] = [ChartPeriod::Week, ChartPeriod::Month, ChartPeriod::Quarter];

    pub fn days(&self) -> u32 {
        match self {
            ChartPeriod::Week => 7,
            ChartPeriod::Month => 30,
            ChartPeriod::Quarter => 90,
        }
    }

    pub fn label(&self) -> String {
        format!("{} days", self.days())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// Toolbar added above a chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartToolbar {
    pub title: String,
    pub active: ChartPeriod,
}

impl Default for ChartToolbar {
    fn default() -> Self {
        Self {
            title: "Analytics chart".to_string(),
            active: ChartPeriod::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    toolbar: Option<ChartToolbar>,
}

impl ChartPanel {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            toolbar: None,
        }
    }

    pub fn toolbar(&self) -> Option<&ChartToolbar> {
        self.toolbar.as_ref()
    }

    /// Active period, defaulting to a week before the toolbar exists
    pub fn period(&self) -> ChartPeriod {
        self.toolbar.as_ref().map(|t| t.active).unwrap_or_default()
    }
}

/// Color theme assigned to a metric card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricTheme {
    Primary,
    Success,
    Warning,
    Info,
}

impl MetricTheme {
    const CYCLE: [MetricTheme; 4] = [
        MetricTheme::Primary,
        MetricTheme::Success,
        MetricTheme::Warning,
        MetricTheme::Info,
    ];

    /// Theme for the card at `index`, cycling through all four
    pub fn for_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    pub fn color(&self) -> Color {
        match self {
            MetricTheme::Primary => palette::PRIMARY,
            MetricTheme::Success => palette::SUCCESS,
            MetricTheme::Warning => palette::WARNING,
            MetricTheme::Info => palette::INFO,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub change: String,
    theme: Option<MetricTheme>,
    icon: Option<&'static str>,
}

impl MetricCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>, change: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            change: change.into(),
            theme: None,
            icon: None,
        }
    }

    pub fn theme(&self) -> Option<MetricTheme> {
        self.theme
    }

    pub fn icon(&self) -> Option<&'static str> {
        self.icon
    }

    pub fn is_enhanced(&self) -> bool {
        self.theme.is_some()
    }

    /// Label with its icon prefix once enhanced
    pub fn display_label(&self) -> String {
        match self.icon {
            Some(icon) => format!("{icon} {}", self.label),
            None => self.label.clone(),
        }
    }

    /// Changes with a leading `+` read as improvements
    pub fn is_positive(&self) -> bool {
        self.change.starts_with('+')
    }
}

/// Icon for a metric label. Later keywords win, so "completed orders" gets
/// the completion icon.
pub fn icon_for_label(label: &str) -> &'static str {
    let text = label.to_lowercase();
    let mut icon = "📊";
    if text.contains("order") {
        icon = "📦";
    }
    if text.contains("complete") {
        icon = "✅";
    }
    if text.contains("revenue") {
        icon = "💰";
    }
    if text.contains("pending") {
        icon = "⏳";
    }
    icon
}

/// Rendered content of one panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    charts: Vec<ChartPanel>,
    metrics: Vec<MetricCard>,
    generation: u64,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chart(mut self, chart: ChartPanel) -> Self {
        self.push_chart(chart);
        self
    }

    pub fn with_metric(mut self, metric: MetricCard) -> Self {
        self.push_metric(metric);
        self
    }

    pub fn push_chart(&mut self, chart: ChartPanel) {
        self.charts.push(chart);
        self.generation += 1;
    }

    pub fn push_metric(&mut self, metric: MetricCard) {
        self.metrics.push(metric);
        self.generation += 1;
    }

    /// Drop everything, e.g. before re-rendering another module
    pub fn clear(&mut self) {
        self.charts.clear();
        self.metrics.clear();
        self.generation += 1;
    }

    pub fn charts(&self) -> &[ChartPanel] {
        &self.charts
    }

    pub fn metrics(&self) -> &[MetricCard] {
        &self.metrics
    }

    pub fn chart(&self, id: &str) -> Option<&ChartPanel> {
        self.charts.iter().find(|c| c.id == id)
    }

    /// Bumped on every structural change
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Make `period` the only active toolbar button of chart `id`.
    /// Returns false if the chart is unknown or has no toolbar yet.
    pub fn select_period(&mut self, id: &str, period: ChartPeriod) -> bool {
        match self
            .charts
            .iter_mut()
            .find(|c| c.id == id)
            .and_then(|c| c.toolbar.as_mut())
        {
            Some(toolbar) => {
                toolbar.active = period;
                true
            }
            None => false,
        }
    }
}

/// What a reconcile pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnhanceReport {
    pub toolbars_added: usize,
    pub metrics_enhanced: usize,
    /// Nothing changed since the previous pass, so the page was not scanned
    pub skipped: bool,
}

impl EnhanceReport {
    pub fn changed(&self) -> bool {
        self.toolbars_added > 0 || self.metrics_enhanced > 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct Enhancer {
    last_generation: Option<u64>,
}

impl Enhancer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decorate whatever on `page` is not decorated yet. Skips the scan when
    /// the page has not changed since the previous pass.
    pub fn reconcile(&mut self, page: &mut Page) -> EnhanceReport {
        if self.last_generation == Some(page.generation) {
            return EnhanceReport {
                skipped: true,
                ..EnhanceReport::default()
            };
        }
        let report = Self::apply(page);
        self.last_generation = Some(page.generation);
        if report.changed() {
            tracing::debug!(
                toolbars = report.toolbars_added,
                metrics = report.metrics_enhanced,
                generation = page.generation,
                "page enhanced"
            );
        }
        report
    }

    /// Forget the last seen generation so the next pass always scans
    pub fn invalidate(&mut self) {
        self.last_generation = None;
    }

    fn apply(page: &mut Page) -> EnhanceReport {
        let mut report = EnhanceReport::default();

        for chart in page.charts.iter_mut().filter(|c| c.toolbar.is_none()) {
            chart.toolbar = Some(ChartToolbar::default());
            report.toolbars_added += 1;
        }

        for (index, metric) in page.metrics.iter_mut().enumerate() {
            if metric.is_enhanced() {
                continue;
            }
            metric.theme = Some(MetricTheme::for_index(index));
            metric.icon = Some(icon_for_label(&metric.label));
            report.metrics_enhanced += 1;
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> Page {
        Page::new()
            .with_chart(ChartPanel::new("orders-daily", "Orders per day", ChartKind::Line))
            .with_chart(ChartPanel::new("orders-region", "Orders by region", ChartKind::Bar))
            .with_metric(MetricCard::new("Orders today", "1,247", "+12%"))
            .with_metric(MetricCard::new("SLA compliance", "94.2%", "+2.1%"))
    }

    #[test]
    fn test_reconcile_decorates_everything_once() {
        let mut page = sample_page();
        let mut enhancer = Enhancer::new();

        let first = enhancer.reconcile(&mut page);
        assert_eq!(first.toolbars_added, 2);
        assert_eq!(first.metrics_enhanced, 2);
        assert!(page.charts().iter().all(|c| c.toolbar().is_some()));

        let second = enhancer.reconcile(&mut page);
        assert!(second.skipped);
        assert!(!second.changed());
    }

    #[test]
    fn test_reconcile_after_invalidate_is_idempotent() {
        let mut page = sample_page();
        let mut enhancer = Enhancer::new();
        enhancer.reconcile(&mut page);
        let before = page.clone();

        enhancer.invalidate();
        let report = enhancer.reconcile(&mut page);
        assert!(!report.skipped);
        assert!(!report.changed());
        assert_eq!(page, before);
    }

    #[test]
    fn test_only_new_elements_are_touched() {
        let mut page = sample_page();
        let mut enhancer = Enhancer::new();
        enhancer.reconcile(&mut page);
        page.select_period("orders-daily", ChartPeriod::Quarter);

        page.push_chart(ChartPanel::new("sla-trend", "SLA trend", ChartKind::Line));
        page.push_metric(MetricCard::new("Pending P1 orders", "15", "-8"));
        let report = enhancer.reconcile(&mut page);

        assert_eq!(report.toolbars_added, 1);
        assert_eq!(report.metrics_enhanced, 1);
        // Existing toolbar state survives
        assert_eq!(page.chart("orders-daily").unwrap().period(), ChartPeriod::Quarter);
        assert_eq!(page.metrics()[2].theme(), Some(MetricTheme::Warning));
        assert_eq!(page.metrics()[2].icon(), Some("⏳"));
    }

    #[test]
    fn test_metric_themes_cycle() {
        assert_eq!(MetricTheme::for_index(0), MetricTheme::Primary);
        assert_eq!(MetricTheme::for_index(3), MetricTheme::Info);
        assert_eq!(MetricTheme::for_index(4), MetricTheme::Primary);
    }

    #[test]
    fn test_label_icons() {
        assert_eq!(icon_for_label("Total orders"), "📦");
        assert_eq!(icon_for_label("Completed orders"), "✅");
        assert_eq!(icon_for_label("Revenue"), "💰");
        assert_eq!(icon_for_label("Orders pending"), "⏳");
        assert_eq!(icon_for_label("Average efficiency"), "📊");
        // Only the four listed keywords count
        assert_eq!(icon_for_label("SLA compliance"), "📊");
        assert_eq!(icon_for_label("P1 orders waiting"), "📦");
    }

    #[test]
    fn test_display_label() {
        let mut page = Page::new().with_metric(MetricCard::new("Revenue", "1.000 ₫", "+1%"));
        assert_eq!(page.metrics()[0].display_label(), "Revenue");
        Enhancer::new().reconcile(&mut page);
        assert_eq!(page.metrics()[0].display_label(), "💰 Revenue");
    }

    #[test]
    fn test_select_period() {
        let mut page = sample_page();
        assert!(!page.select_period("orders-daily", ChartPeriod::Month));

        Enhancer::new().reconcile(&mut page);
        let generation = page.generation();
        assert!(page.select_period("orders-daily", ChartPeriod::Month));
        assert_eq!(page.chart("orders-daily").unwrap().period(), ChartPeriod::Month);
        assert_eq!(page.generation(), generation);
        assert!(!page.select_period("missing", ChartPeriod::Month));
    }

    #[test]
    fn test_period_labels() {
        let days: Vec<_> = ChartPeriod::ALL.iter().map(|p| p.days()).collect();
        assert_eq!(days, vec![7, 30, 90]);
        assert_eq!(ChartPeriod::Month.label(), "30 days");
    }
}
