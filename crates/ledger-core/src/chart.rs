//! Chart-ready series and the palette used to color them.

use std::collections::HashMap;

use ledger_domain::Category;

use crate::aggregate::CategoryTotals;

/// Colors used when no palette is configured.
pub const DEFAULT_PALETTE: [&str; 4] = ["#4F46E5", "#22C55E", "#EF4444", "#FACC15"];

/// How palette colors are matched to chart slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// `palette[i mod len]` by slice position; a category's color moves when
    /// the set of present categories changes.
    #[default]
    Positional,
    /// Fixed per category, keyed by its declaration order unless overridden.
    ByCategory,
}

/// Cyclic color palette plus the rule for assigning it.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<String>,
    mode: ColorMode,
    overrides: HashMap<Category, String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            mode: ColorMode::Positional,
            overrides: HashMap::new(),
        }
    }
}

impl Palette {
    /// Builds a palette from configured colors; an empty list keeps the defaults.
    pub fn new<I, S>(colors: I, mode: ColorMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors
            .into_iter()
            .map(Into::into)
            .filter(|color: &String| !color.trim().is_empty())
            .collect();
        let mut palette = Palette::default();
        if !colors.is_empty() {
            palette.colors = colors;
        }
        palette.mode = mode;
        palette
    }

    /// Pins `category` to `color` when coloring by category.
    pub fn with_override(mut self, category: Category, color: impl Into<String>) -> Self {
        self.overrides.insert(category, color.into());
        self
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Color for the slice at `position` showing `category`.
    pub fn color_for(&self, position: usize, category: Category) -> &str {
        match self.mode {
            ColorMode::Positional => &self.colors[position % self.colors.len()],
            ColorMode::ByCategory => self
                .overrides
                .get(&category)
                .unwrap_or_else(|| &self.colors[category.ordinal() % self.colors.len()]),
        }
    }
}

/// Parallel label/value/color sequences for a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}

impl ChartSeries {
    pub fn from_totals(totals: &CategoryTotals, palette: &Palette) -> Self {
        let mut series = ChartSeries {
            labels: Vec::with_capacity(totals.len()),
            values: Vec::with_capacity(totals.len()),
            colors: Vec::with_capacity(totals.len()),
        };
        for (position, (category, sum)) in totals.iter().enumerate() {
            series.labels.push(category.label().to_string());
            series.values.push(sum);
            series
                .colors
                .push(palette.color_for(position, category).to_string());
        }
        series
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_configuration_falls_back_to_default_colors() {
        let palette = Palette::new(Vec::<String>::new(), ColorMode::Positional);
        assert_eq!(palette.colors().len(), DEFAULT_PALETTE.len());
        let blank = Palette::new(["", "  "], ColorMode::Positional);
        assert_eq!(blank.colors()[0], DEFAULT_PALETTE[0]);
    }

    #[test]
    fn positional_colors_cycle_through_palette() {
        let palette = Palette::new(["red", "blue"], ColorMode::Positional);
        assert_eq!(palette.color_for(0, Category::Other), "red");
        assert_eq!(palette.color_for(1, Category::Other), "blue");
        assert_eq!(palette.color_for(2, Category::Food), "red");
    }

    #[test]
    fn by_category_colors_ignore_position() {
        let palette = Palette::new(["red", "blue", "green"], ColorMode::ByCategory)
            .with_override(Category::Other, "black");
        assert_eq!(palette.color_for(0, Category::Travel), "blue");
        assert_eq!(palette.color_for(5, Category::Travel), "blue");
        assert_eq!(palette.color_for(0, Category::Entertainment), "red");
        assert_eq!(palette.color_for(2, Category::Other), "black");
    }
}
