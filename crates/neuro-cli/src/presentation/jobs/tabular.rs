use super::columns::{Align, JobColumn, JobColumnInfo, default_columns};
use crate::presentation::formatters::RelativeTime;
use crate::presentation::formatters::text::{
    char_width, cut, pad_center, pad_left, pad_right, truncate,
};
use chrono::{DateTime, Utc};
use neuro_types::{ImageNameParser, JobDescription, JobStatus};

const COLUMN_GAP: usize = 2;
const TEXT_BUDGET: usize = 50;

/// Display projection of one job in `neuro ps`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularJobRow {
    pub id: String,
    pub name: String,
    pub status: String,
    pub when: String,
    pub created: String,
    pub image: String,
    pub owner: String,
    pub description: String,
    pub command: String,
}

impl TabularJobRow {
    pub fn from_job(
        job: &JobDescription,
        image_parser: &ImageNameParser,
        time: &RelativeTime,
        now: DateTime<Utc>,
    ) -> Self {
        let history = &job.history;
        let stamp = match job.status {
            JobStatus::Pending | JobStatus::Unknown => None,
            JobStatus::Running => history.started_at.as_deref(),
            JobStatus::Succeeded | JobStatus::Failed => history.finished_at.as_deref(),
        }
        .unwrap_or(&history.created_at);

        Self {
            id: job.id.clone(),
            name: job.name.clone().unwrap_or_default(),
            status: job.status.to_string(),
            when: time.format_str(stamp, now),
            created: time.format_str(&history.created_at, now),
            image: image_parser.short_form(&job.container.image),
            owner: job.owner.clone(),
            description: truncate(job.description.as_deref().unwrap_or(""), TEXT_BUDGET),
            command: truncate(job.container.command.as_deref().unwrap_or(""), TEXT_BUDGET),
        }
    }

    pub fn get(&self, column: JobColumn) -> &str {
        match column {
            JobColumn::Id => &self.id,
            JobColumn::Name => &self.name,
            JobColumn::Status => &self.status,
            JobColumn::When => &self.when,
            JobColumn::Created => &self.created,
            JobColumn::Image => &self.image,
            JobColumn::Owner => &self.owner,
            JobColumn::Description => &self.description,
            JobColumn::Command => &self.command,
        }
    }
}

/// Job table with content-sized columns.
///
/// Column width is the widest of header and cells, clamped to the column's
/// bounds. A cell wider than its column pushes the rest of its line to the
/// right; later cells snap back to their column once there is room again.
#[derive(Debug, Clone)]
pub struct TabularJobsFormatter {
    /// Hard cut for every line; 0 disables it
    max_width: usize,
    image_parser: ImageNameParser,
    columns: Vec<JobColumnInfo>,
    time: RelativeTime,
}

impl TabularJobsFormatter {
    pub fn new(max_width: usize, image_parser: ImageNameParser) -> Self {
        Self {
            max_width,
            image_parser,
            columns: default_columns(),
            time: RelativeTime::default(),
        }
    }

    pub fn with_columns(mut self, columns: Vec<JobColumnInfo>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_time(mut self, time: RelativeTime) -> Self {
        self.time = time;
        self
    }

    pub fn format(&self, jobs: &[JobDescription]) -> Vec<String> {
        self.format_at(jobs, Utc::now())
    }

    pub fn format_at(&self, jobs: &[JobDescription], now: DateTime<Utc>) -> Vec<String> {
        let rows: Vec<TabularJobRow> = jobs
            .iter()
            .map(|job| TabularJobRow::from_job(job, &self.image_parser, &self.time, now))
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|info| {
                let content = rows
                    .iter()
                    .map(|row| char_width(row.get(info.column)))
                    .max()
                    .unwrap_or(0);
                info.width.resolve(content.max(char_width(&info.title)))
            })
            .collect();

        let header: Vec<&str> = self.columns.iter().map(|c| c.title.as_str()).collect();
        let mut lines = vec![self.render_line(&header, &widths)];
        for row in &rows {
            let cells: Vec<&str> = self.columns.iter().map(|c| row.get(c.column)).collect();
            lines.push(self.render_line(&cells, &widths));
        }

        if self.max_width > 0 {
            for line in &mut lines {
                *line = cut(line, self.max_width);
            }
        }
        lines
    }

    fn render_line(&self, cells: &[&str], widths: &[usize]) -> String {
        let mut line = String::new();
        let mut column_start = 0;
        let last = cells.len().saturating_sub(1);

        let columns = cells.iter().zip(widths).zip(&self.columns);
        for (index, ((cell, width), info)) in columns.enumerate() {
            if index > 0 {
                let start = column_start.max(char_width(&line) + COLUMN_GAP);
                line.push_str(&" ".repeat(start - char_width(&line)));
            }

            let aligned = match info.align {
                Align::Left => pad_right(cell, *width),
                Align::Right => pad_left(cell, *width),
                Align::Center => pad_center(cell, *width),
            };
            if index == last {
                line.push_str(aligned.trim_end());
            } else {
                line.push_str(&aligned);
            }

            column_start += width + COLUMN_GAP;
        }

        line
    }
}
