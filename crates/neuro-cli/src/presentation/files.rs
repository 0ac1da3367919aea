//! `ls`-style storage listings.

use super::formatters::text::{char_width, pad_left};
use super::formatters::{format_human_size, time::format_local_datetime};
use super::painter::Painter;
use neuro_types::{FileStatus, FileStatusType};

const COLUMN_GUTTER: usize = 2;

#[derive(Debug, Clone)]
pub enum FilesFormatter {
    /// One name per line
    Simple { painter: Painter },
    /// `ls -l`
    Long {
        human_readable: bool,
        painter: Painter,
    },
    /// `ls -C`: names in columns, filled top to bottom
    VerticalColumns { width: usize, painter: Painter },
}

impl FilesFormatter {
    pub fn format(&self, files: &[FileStatus]) -> Vec<String> {
        match self {
            FilesFormatter::Simple { painter } => files
                .iter()
                .map(|file| painter.paint(&file.name, file))
                .collect(),
            FilesFormatter::Long {
                human_readable,
                painter,
            } => format_long(files, *human_readable, painter),
            FilesFormatter::VerticalColumns { width, painter } => {
                format_columns(files, *width, painter)
            }
        }
    }
}

fn permission_code(file: &FileStatus) -> String {
    let kind = match file.file_type {
        FileStatusType::Directory => 'd',
        FileStatusType::File => '-',
    };
    let access = file.permission.as_str().chars().next().unwrap_or('-');
    format!("{}{}", kind, access)
}

fn format_long(files: &[FileStatus], human_readable: bool, painter: &Painter) -> Vec<String> {
    let sizes: Vec<String> = files
        .iter()
        .map(|file| {
            if human_readable {
                format_human_size(file.size)
            } else {
                file.size.to_string()
            }
        })
        .collect();
    let size_width = sizes.iter().map(|s| char_width(s)).max().unwrap_or(0);

    files
        .iter()
        .zip(&sizes)
        .map(|(file, size)| {
            format!(
                "{} {} {} {}",
                permission_code(file),
                pad_left(size, size_width),
                format_local_datetime(file.modification_time),
                painter.paint(&file.name, file)
            )
        })
        .collect()
}

/// Rows and per-column widths of the widest layout that fits `width`.
fn column_layout(lengths: &[usize], width: usize) -> (usize, Vec<usize>) {
    let count = lengths.len();

    for columns in (1..=count).rev() {
        let rows = count.div_ceil(columns);
        let widths: Vec<usize> = lengths
            .chunks(rows)
            .map(|column| column.iter().copied().max().unwrap_or(0))
            .collect();
        let total: usize =
            widths.iter().sum::<usize>() + COLUMN_GUTTER * widths.len().saturating_sub(1);
        if total <= width {
            return (rows, widths);
        }
    }

    let widest = lengths.iter().copied().max().unwrap_or(0);
    (count, vec![widest])
}

fn format_columns(files: &[FileStatus], width: usize, painter: &Painter) -> Vec<String> {
    if files.is_empty() {
        return Vec::new();
    }

    let lengths: Vec<usize> = files.iter().map(|f| char_width(&f.name)).collect();
    let (rows, widths) = column_layout(&lengths, width);

    (0..rows)
        .map(|row| {
            let cells: Vec<usize> = (0..widths.len())
                .map(|column| column * rows + row)
                .filter(|&index| index < files.len())
                .collect();

            let mut line = String::new();
            for (position, &index) in cells.iter().enumerate() {
                let file = &files[index];
                line.push_str(&painter.paint(&file.name, file));
                if position + 1 < cells.len() {
                    let column = index / rows;
                    let padding = widths[column] - lengths[index] + COLUMN_GUTTER;
                    line.push_str(&" ".repeat(padding));
                }
            }
            line
        })
        .collect()
}

/// Orders a listing before it is formatted. All orders are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilesSorter {
    /// Case-insensitive, files and directories interleaved
    Name,
    /// Ascending; directories count as empty
    Size,
    /// Oldest first
    Time,
}

impl FilesSorter {
    pub fn sort(&self, files: &mut [FileStatus]) {
        match self {
            FilesSorter::Name => files.sort_by_cached_key(|f| f.name.to_lowercase()),
            FilesSorter::Size => files.sort_by_key(|f| if f.is_dir() { 0 } else { f.size }),
            FilesSorter::Time => files.sort_by_key(|f| f.modification_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDateTime, TimeZone};
    use neuro_types::FilePermission;

    fn local(ts: &str) -> i64 {
        let naive = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap();
        Local
            .from_local_datetime(&naive)
            .earliest()
            .unwrap()
            .timestamp()
    }

    fn files() -> Vec<FileStatus> {
        vec![
            FileStatus::new(
                "File1",
                2048,
                FileStatusType::File,
                local("2018-01-01 03:00:00"),
                FilePermission::Read,
            ),
            FileStatus::new(
                "File2",
                1024,
                FileStatusType::File,
                local("2018-10-10 13:10:10"),
                FilePermission::Read,
            ),
            FileStatus::new(
                "File3 with space",
                1_024_001,
                FileStatusType::File,
                local("2019-02-02 05:02:02"),
                FilePermission::Read,
            ),
        ]
    }

    fn folders() -> Vec<FileStatus> {
        vec![
            FileStatus::new(
                "Folder1",
                0,
                FileStatusType::Directory,
                local("2017-03-03 06:03:03"),
                FilePermission::Manage,
            ),
            FileStatus::new(
                "1Folder with space",
                0,
                FileStatusType::Directory,
                local("2017-03-03 06:03:02"),
                FilePermission::Manage,
            ),
        ]
    }

    fn files_and_folders() -> Vec<FileStatus> {
        let mut all = files();
        all.extend(folders());
        all
    }

    #[test]
    fn test_simple_formatter() {
        let formatter = FilesFormatter::Simple {
            painter: Painter::None,
        };
        let names: Vec<String> = files_and_folders().into_iter().map(|f| f.name).collect();
        assert_eq!(formatter.format(&files_and_folders()), names);
    }

    #[test]
    fn test_long_formatter() {
        let formatter = FilesFormatter::Long {
            human_readable: false,
            painter: Painter::None,
        };
        assert_eq!(
            formatter.format(&files_and_folders()),
            vec![
                "-r    2048 2018-01-01 03:00:00 File1",
                "-r    1024 2018-10-10 13:10:10 File2",
                "-r 1024001 2019-02-02 05:02:02 File3 with space",
                "dm       0 2017-03-03 06:03:03 Folder1",
                "dm       0 2017-03-03 06:03:02 1Folder with space",
            ]
        );
    }

    #[test]
    fn test_long_formatter_human_readable() {
        let formatter = FilesFormatter::Long {
            human_readable: true,
            painter: Painter::None,
        };
        assert_eq!(
            formatter.format(&files_and_folders()),
            vec![
                "-r    2.0K 2018-01-01 03:00:00 File1",
                "-r    1.0K 2018-10-10 13:10:10 File2",
                "-r 1000.0K 2019-02-02 05:02:02 File3 with space",
                "dm       0 2017-03-03 06:03:03 Folder1",
                "dm       0 2017-03-03 06:03:02 1Folder with space",
            ]
        );
    }

    #[test]
    fn test_column_formatter() {
        for width in [40, 36] {
            let formatter = FilesFormatter::VerticalColumns {
                width,
                painter: Painter::None,
            };
            assert_eq!(
                formatter.format(&files_and_folders()),
                vec![
                    "File1             Folder1",
                    "File2             1Folder with space",
                    "File3 with space",
                ],
                "width {}",
                width
            );
        }
    }

    #[test]
    fn test_column_formatter_degrades_to_one_per_line() {
        let formatter = FilesFormatter::VerticalColumns {
            width: 1,
            painter: Painter::None,
        };
        assert_eq!(
            formatter.format(&files_and_folders()),
            vec![
                "File1",
                "File2",
                "File3 with space",
                "Folder1",
                "1Folder with space",
            ]
        );
    }

    #[test]
    fn test_column_widths_ignore_color_codes() {
        let painter = Painter::Gnu(super::super::painter::GnuPainter::new("di=1").unwrap());
        let formatter = FilesFormatter::VerticalColumns {
            width: 40,
            painter,
        };
        let lines = formatter.format(&files_and_folders());
        assert_eq!(lines[0], "File1             \x1b[1mFolder1\x1b[0m");
    }

    #[test]
    fn test_formatters_with_empty_files() {
        let formatters = [
            FilesFormatter::Simple {
                painter: Painter::None,
            },
            FilesFormatter::VerticalColumns {
                width: 100,
                painter: Painter::None,
            },
            FilesFormatter::Long {
                human_readable: false,
                painter: Painter::None,
            },
        ];
        for formatter in formatters {
            assert!(formatter.format(&[]).is_empty());
        }
    }

    #[test]
    fn test_sort_by_name() {
        let mut all = files_and_folders();
        FilesSorter::Name.sort(&mut all);
        let names: Vec<&str> = all.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["1Folder with space", "File1", "File2", "File3 with space", "Folder1"]
        );
    }

    #[test]
    fn test_sort_by_size_is_stable_with_directories_first() {
        let mut all = files_and_folders();
        FilesSorter::Size.sort(&mut all);
        let names: Vec<&str> = all.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Folder1", "1Folder with space", "File2", "File1", "File3 with space"]
        );
    }

    #[test]
    fn test_sort_by_time() {
        let mut all = files_and_folders();
        FilesSorter::Time.sort(&mut all);
        let names: Vec<&str> = all.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["1Folder with space", "Folder1", "File1", "File2", "File3 with space"]
        );
    }
}
