//! Month grid: cursor arithmetic, weekday alignment, event placement and
//! text rendering.

use crate::config::{Locale, WeekStart};
use crate::errors::{AppError, AppResult};
use crate::models::Event;
use crate::utils::colors::{CYAN, TODAY, paint};
use crate::utils::date::days_in_month;
use crate::utils::formatting::{bold, pad_right, truncate};
use chrono::{Datelike, Months, NaiveDate};

const WEEKDAYS_ES: [&str; 7] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"];
const WEEKDAYS_EN: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];
const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The displayed month. Always points at day 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| AppError::InvalidMonth(format!("{year}-{month:02}")))
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn current() -> Self {
        Self::containing(crate::utils::date::today())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month()).unwrap_or(28)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first
            .with_day(self.days_in_month())
            .unwrap_or(self.first)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// One month forward. Stays put at the edge of chrono's range.
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    /// One month back. Stays put at the edge of chrono's range.
    pub fn prev(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    /// Apply `steps` single-month moves (negative goes back).
    pub fn shift(self, steps: i32) -> Self {
        let mut c = self;
        for _ in 0..steps.unsigned_abs() {
            c = if steps > 0 { c.next() } else { c.prev() };
        }
        c
    }

    /// Blank cells before day 1 so it lands under its weekday.
    pub fn leading_blanks(&self, week_start: WeekStart) -> usize {
        let wd = self.first.weekday();
        match week_start {
            WeekStart::Monday => wd.num_days_from_monday() as usize,
            WeekStart::Sunday => wd.num_days_from_sunday() as usize,
        }
    }

    /// Month name and year, as the header shows it.
    pub fn title(&self, locale: Locale) -> String {
        let idx = self.month0();
        match locale {
            Locale::Es => format!("{} de {}", MONTHS_ES[idx], self.year()),
            Locale::En => format!("{} {}", MONTHS_EN[idx], self.year()),
        }
    }

    fn month0(&self) -> usize {
        self.first.month0() as usize
    }
}

/// Weekday header labels starting from `week_start`.
pub fn weekday_labels(locale: Locale, week_start: WeekStart) -> [&'static str; 7] {
    let mut labels = match locale {
        Locale::Es => WEEKDAYS_ES,
        Locale::En => WEEKDAYS_EN,
    };
    if week_start == WeekStart::Sunday {
        labels.rotate_right(1);
    }
    labels
}

/// Events falling on exactly `date`, in insertion order.
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|e| e.date == date).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub day: u32,
    pub date: NaiveDate,
    pub is_today: bool,
    pub events: Vec<&'a Event>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    Empty,
    Day(DayCell<'a>),
}

impl<'a> Cell<'a> {
    pub fn as_day(&self) -> Option<&DayCell<'a>> {
        match self {
            Cell::Day(d) => Some(d),
            Cell::Empty => None,
        }
    }
}

/// Output options for [`MonthGrid::render`].
#[derive(Debug, Clone, Copy)]
pub struct RenderStyle {
    pub locale: Locale,
    pub cell_width: usize,
    pub highlight_today: bool,
    pub color: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            cell_width: 16,
            highlight_today: true,
            color: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonthGrid<'a> {
    pub cursor: MonthCursor,
    pub week_start: WeekStart,
    pub leading: usize,
    /// Leading blanks, one cell per day, trailing blanks; length is a multiple of 7.
    pub cells: Vec<Cell<'a>>,
}

impl<'a> MonthGrid<'a> {
    pub fn build(
        cursor: MonthCursor,
        events: &'a [Event],
        today: NaiveDate,
        week_start: WeekStart,
    ) -> Self {
        let leading = cursor.leading_blanks(week_start);
        let mut cells: Vec<Cell<'a>> = Vec::with_capacity(42);
        cells.extend((0..leading).map(|_| Cell::Empty));

        let mut date = cursor.first_day();
        for day in 1..=cursor.days_in_month() {
            cells.push(Cell::Day(DayCell {
                day,
                date,
                is_today: date == today,
                events: events_on(events, date),
            }));
            date = date.succ_opt().unwrap_or(date);
        }

        while cells.len() % 7 != 0 {
            cells.push(Cell::Empty);
        }

        Self {
            cursor,
            week_start,
            leading,
            cells,
        }
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[Cell<'a>]> {
        self.cells.chunks(7)
    }

    /// Cell of day `day` (1-based), if the month has it.
    pub fn day(&self, day: u32) -> Option<&DayCell<'a>> {
        self.cells
            .iter()
            .filter_map(Cell::as_day)
            .find(|c| c.day == day)
    }

    pub fn event_count(&self) -> usize {
        self.cells
            .iter()
            .filter_map(Cell::as_day)
            .map(|c| c.events.len())
            .sum()
    }

    /// Render title, weekday header, week rows and the agenda.
    ///
    /// Each call builds the output from scratch.
    pub fn render(&self, style: &RenderStyle) -> String {
        let w = style.cell_width.max(6);
        let mut out = String::new();

        let title = self.cursor.title(style.locale);
        if style.color {
            out.push_str(&bold(&title));
        } else {
            out.push_str(&title);
        }
        out.push('\n');

        let border = format!("+{}\n", format!("{}+", "-".repeat(w)).repeat(7));
        out.push_str(&border);

        out.push('|');
        for label in weekday_labels(style.locale, self.week_start) {
            out.push_str(&pad_right(label, w));
            out.push('|');
        }
        out.push('\n');
        out.push_str(&border);

        for week in self.weeks() {
            out.push('|');
            for cell in week {
                out.push_str(&day_number(cell, w, style));
                out.push('|');
            }
            out.push('\n');

            let depth = week
                .iter()
                .filter_map(Cell::as_day)
                .map(|c| c.events.len())
                .max()
                .unwrap_or(0);

            for line in 0..depth {
                out.push('|');
                for cell in week {
                    let text = cell
                        .as_day()
                        .and_then(|d| d.events.get(line))
                        .map(|e| truncate(&e.cell_label(), w))
                        .unwrap_or_default();
                    let padded = pad_right(&text, w);
                    out.push_str(&paint(&padded, CYAN, style.color && !text.is_empty()));
                    out.push('|');
                }
                out.push('\n');
            }
            out.push_str(&border);
        }

        out.push('\n');
        out.push_str(&self.render_agenda(style));
        out
    }

    /// Full event details for the month, grouped by day.
    pub fn render_agenda(&self, style: &RenderStyle) -> String {
        let mut out = String::new();
        let wrap_width = (style.cell_width * 4).max(40);

        for cell in self.cells.iter().filter_map(Cell::as_day) {
            if cell.events.is_empty() {
                continue;
            }
            out.push_str(&format!("{}\n", cell.date.format("%Y-%m-%d")));
            for e in &cell.events {
                out.push_str(&format!("  {}\n", e.cell_label()));
                for (label, value) in e.details() {
                    if value.trim().is_empty() {
                        continue;
                    }
                    let prefix = format!("      {label}: ");
                    let indent = " ".repeat(prefix.chars().count());
                    let opts = textwrap::Options::new(wrap_width)
                        .initial_indent(&prefix)
                        .subsequent_indent(&indent);
                    for l in textwrap::wrap(value, opts) {
                        out.push_str(&l);
                        out.push('\n');
                    }
                }
            }
        }

        if out.is_empty() {
            out.push_str(match style.locale {
                Locale::Es => "No hay eventos este mes.\n",
                Locale::En => "No events this month.\n",
            });
        }
        out
    }
}

fn day_number(cell: &Cell<'_>, w: usize, style: &RenderStyle) -> String {
    match cell {
        Cell::Empty => " ".repeat(w),
        Cell::Day(d) => {
            let mark = d.is_today && style.highlight_today;
            let text = if mark {
                format!("{:>2}*", d.day)
            } else {
                format!("{:>2}", d.day)
            };
            let padded = pad_right(&text, w);
            if mark && style.color {
                format!("{}{}", paint(&text, TODAY, true), &padded[text.len()..])
            } else {
                padded
            }
        }
    }
}
