//! Analytics dashboard with a weekly bar chart and summary statistics

use std::fmt::Write as _;

use crate::domain::RenderBundle;
use crate::error::Result;

pub const NAME: &str = "Analytics Dashboard";
pub const DESCRIPTION: &str = "Data visualization with charts";

const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Initial bar heights in percent; the script redraws them once mounted
const INITIAL_HEIGHTS: [u8; 7] = [45, 62, 38, 80, 71, 29, 54];

const STATS: [(&str, &str); 3] = [
    ("Total Users", "1,234"),
    ("Active Users", "789"),
    ("Conversion Rate", "23%"),
];

const STYLE: &str = r"
.chart-bar {
    transition: height 1s ease-in-out;
}
";

const BEHAVIOR: &str = r"
// Re-randomize chart bars every 3 seconds
setInterval(() => {
    document.querySelectorAll('.chart-bar').forEach(bar => {
        bar.style.height = `${Math.random() * 100}%`;
    });
}, 3000);
";

pub fn generate() -> Result<RenderBundle> {
    let mut bars = String::new();
    for height in INITIAL_HEIGHTS {
        let _ = write!(
            bars,
            r#"<div class="chart-bar bg-blue-500 w-full" style="height: {height}%"></div>"#
        );
    }

    let labels: String = DAYS.iter().map(|day| format!("<span>{day}</span>")).collect();

    let mut stats = String::new();
    for (label, value) in STATS {
        let _ = write!(
            stats,
            r#"
            <div class="flex justify-between items-center">
                <span>{label}</span>
                <span class="font-semibold">{value}</span>
            </div>"#
        );
    }

    let markup = format!(
        r#"
<div class="grid grid-cols-1 md:grid-cols-2 gap-4">
    <div class="bg-white p-4 rounded-lg shadow">
        <h3 class="text-lg font-semibold mb-2">Daily Visitors</h3>
        <div class="h-40 bg-gray-50 rounded flex items-end p-2 space-x-2">{bars}</div>
        <div class="flex justify-between mt-2 text-sm text-gray-600">{labels}</div>
    </div>
    <div class="bg-white p-4 rounded-lg shadow">
        <h3 class="text-lg font-semibold mb-2">Statistics</h3>
        <div class="space-y-4">{stats}
        </div>
    </div>
</div>
"#
    );

    Ok(RenderBundle::new(markup, STYLE, BEHAVIOR))
}
