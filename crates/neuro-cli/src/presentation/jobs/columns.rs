//! Column selection for `neuro ps --format`.
//!
//! A spec lists columns either bare (`id name`, `id,name`) or in braces
//! with properties: `{id;max=30;min=5;align=center;TITLE}`. Column names
//! may be abbreviated to any unambiguous prefix.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\s,]+").unwrap());

static COLUMN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\{(?P<block>[^{}]*)\}|(?P<word>[^\s,{}]+))").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnSpecError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Ambiguous column: {0}")]
    AmbiguousColumn(String),

    #[error("Invalid property: {0}")]
    InvalidProperty(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

impl Align {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "left" => Some(Align::Left),
            "right" => Some(Align::Right),
            "center" => Some(Align::Center),
            _ => None,
        }
    }
}

/// Width bounds of a table column. `width` pins the column exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnWidth {
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub width: Option<usize>,
}

impl ColumnWidth {
    pub const fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self {
            min,
            max,
            width: None,
        }
    }

    pub const fn fixed(width: usize) -> Self {
        Self {
            min: Some(width),
            max: Some(width),
            width: Some(width),
        }
    }

    /// Final width for content that is `natural` characters wide.
    pub fn resolve(&self, natural: usize) -> usize {
        if let Some(width) = self.width {
            return width;
        }
        let mut width = natural;
        if let Some(min) = self.min {
            width = width.max(min);
        }
        if let Some(max) = self.max {
            width = width.min(max);
        }
        width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobColumn {
    Id,
    Name,
    Status,
    When,
    Created,
    Image,
    Owner,
    Description,
    Command,
}

impl JobColumn {
    pub const ALL: [JobColumn; 9] = [
        JobColumn::Id,
        JobColumn::Name,
        JobColumn::Status,
        JobColumn::When,
        JobColumn::Created,
        JobColumn::Image,
        JobColumn::Owner,
        JobColumn::Description,
        JobColumn::Command,
    ];

    pub const DEFAULT: [JobColumn; 7] = [
        JobColumn::Id,
        JobColumn::Name,
        JobColumn::Status,
        JobColumn::When,
        JobColumn::Image,
        JobColumn::Description,
        JobColumn::Command,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            JobColumn::Id => "id",
            JobColumn::Name => "name",
            JobColumn::Status => "status",
            JobColumn::When => "when",
            JobColumn::Created => "created",
            JobColumn::Image => "image",
            JobColumn::Owner => "owner",
            JobColumn::Description => "description",
            JobColumn::Command => "command",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            JobColumn::Id => "ID",
            JobColumn::Name => "NAME",
            JobColumn::Status => "STATUS",
            JobColumn::When => "WHEN",
            JobColumn::Created => "CREATED",
            JobColumn::Image => "IMAGE",
            JobColumn::Owner => "OWNER",
            JobColumn::Description => "DESCRIPTION",
            JobColumn::Command => "COMMAND",
        }
    }

    pub fn default_width(&self) -> ColumnWidth {
        match self {
            JobColumn::Name => ColumnWidth::new(None, Some(40)),
            JobColumn::Status => ColumnWidth::new(None, Some(10)),
            JobColumn::Image => ColumnWidth::new(None, Some(15)),
            JobColumn::Owner => ColumnWidth::new(None, Some(25)),
            JobColumn::Description | JobColumn::Command => ColumnWidth::new(None, Some(50)),
            JobColumn::Id | JobColumn::When | JobColumn::Created => ColumnWidth::default(),
        }
    }

    /// Exact id first, then a unique prefix. Case-insensitive.
    pub fn lookup(name: &str) -> Result<Self, ColumnSpecError> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Err(ColumnSpecError::InvalidFormat(name.to_string()));
        }

        if let Some(column) = Self::ALL.iter().find(|c| c.id() == needle) {
            return Ok(*column);
        }

        let candidates: Vec<JobColumn> = Self::ALL
            .iter()
            .copied()
            .filter(|c| c.id().starts_with(&needle))
            .collect();

        match candidates.as_slice() {
            [] => Err(ColumnSpecError::UnknownColumn(name.to_string())),
            [column] => Ok(*column),
            _ => Err(ColumnSpecError::AmbiguousColumn(name.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobColumnInfo {
    pub column: JobColumn,
    pub title: String,
    pub align: Align,
    pub width: ColumnWidth,
}

impl JobColumnInfo {
    pub fn new(column: JobColumn) -> Self {
        Self {
            column,
            title: column.title().to_string(),
            align: Align::default(),
            width: column.default_width(),
        }
    }
}

pub fn default_columns() -> Vec<JobColumnInfo> {
    JobColumn::DEFAULT
        .iter()
        .copied()
        .map(JobColumnInfo::new)
        .collect()
}

/// Parse a column spec. `None` or a blank spec selects the default columns.
pub fn parse_columns(spec: Option<&str>) -> Result<Vec<JobColumnInfo>, ColumnSpecError> {
    let spec = match spec {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Ok(default_columns()),
    };

    let mut columns = Vec::new();
    let mut rest = spec;

    loop {
        if let Some(sep) = SEPARATOR.find(rest) {
            rest = &rest[sep.end()..];
        }
        if rest.is_empty() {
            break;
        }

        let captures = COLUMN
            .captures(rest)
            .ok_or_else(|| ColumnSpecError::InvalidFormat(spec.to_string()))?;

        let info = if let Some(block) = captures.name("block") {
            parse_block(block.as_str())?
        } else if let Some(word) = captures.name("word") {
            JobColumnInfo::new(JobColumn::lookup(word.as_str())?)
        } else {
            return Err(ColumnSpecError::InvalidFormat(spec.to_string()));
        };
        columns.push(info);

        let consumed = captures.get(0).map(|m| m.end()).unwrap_or(rest.len());
        rest = &rest[consumed..];
    }

    Ok(columns)
}

fn parse_block(block: &str) -> Result<JobColumnInfo, ColumnSpecError> {
    let mut parts = block.split(';');
    let name = parts.next().unwrap_or("");
    let mut info = JobColumnInfo::new(JobColumn::lookup(name)?);

    for part in parts {
        let Some((key, value)) = part.split_once('=') else {
            info.title = part.to_string();
            continue;
        };

        let invalid = || ColumnSpecError::InvalidProperty(part.to_string());
        let number = || value.trim().parse::<usize>().map_err(|_| invalid());

        match key.trim().to_ascii_lowercase().as_str() {
            "min" => info.width.min = Some(number()?),
            "max" => info.width.max = Some(number()?),
            "width" => info.width = ColumnWidth::fixed(number()?),
            "align" => info.align = Align::parse(value.trim()).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        }
    }

    Ok(info)
}
