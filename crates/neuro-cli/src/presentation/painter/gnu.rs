use super::color_spec::{ColorRuleSet, ColorSpecError, Indicator};
use neuro_types::{FileStatus, FileStatusType};

/// Paints names the way GNU `ls --color` does with `LS_COLORS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GnuPainter {
    rules: ColorRuleSet,
}

impl GnuPainter {
    pub fn new(spec: &str) -> Result<Self, ColorSpecError> {
        Ok(Self {
            rules: ColorRuleSet::parse(spec)?,
        })
    }

    fn code_for(&self, name: &str, file: &FileStatus) -> Option<&str> {
        let code = match file.file_type {
            FileStatusType::Directory => self.rules.indicator(Indicator::Directory),
            FileStatusType::File => self
                .rules
                .match_name(name)
                .or_else(|| self.non_empty(Indicator::File))
                .or_else(|| self.non_empty(Indicator::Normal)),
        };
        code.filter(|c| !c.is_empty())
    }

    fn non_empty(&self, indicator: Indicator) -> Option<&str> {
        self.rules.indicator(indicator).filter(|c| !c.is_empty())
    }

    pub fn paint(&self, name: &str, file: &FileStatus) -> String {
        let Some(code) = self.code_for(name, file) else {
            return name.to_string();
        };

        let lc = self.rules.indicator(Indicator::LeftCode).unwrap_or("");
        let rc = self.rules.indicator(Indicator::RightCode).unwrap_or("");
        let end = match self.non_empty(Indicator::EndCode) {
            Some(ec) => ec.to_string(),
            None => {
                let rs = self.non_empty(Indicator::Reset).unwrap_or("0");
                format!("{}{}{}", lc, rs, rc)
            }
        };

        format!("{}{}{}{}{}", lc, code, rc, name, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuro_types::FilePermission;

    fn file() -> FileStatus {
        FileStatus::new(
            "test.txt",
            1024,
            FileStatusType::File,
            1514775600,
            FilePermission::Read,
        )
    }

    fn folder() -> FileStatus {
        FileStatus::new(
            "tmp",
            0,
            FileStatusType::Directory,
            1514775600,
            FilePermission::Write,
        )
    }

    fn paint_both(spec: &str) -> (String, String) {
        let painter = GnuPainter::new(spec).unwrap();
        let (file, folder) = (file(), folder());
        (
            painter.paint(&file.name, &file),
            painter.paint(&folder.name, &folder),
        )
    }

    #[test]
    fn test_file_indicator_beats_normal() {
        assert_eq!(
            paint_both("di=32;41:fi=0;44:no=0;46"),
            (
                "\x1b[0;44mtest.txt\x1b[0m".to_string(),
                "\x1b[32;41mtmp\x1b[0m".to_string()
            )
        );
    }

    #[test]
    fn test_normal_used_without_file_indicator() {
        let (file, folder) = paint_both("di=32;41:no=0;46");
        assert_eq!(file, "\x1b[0;46mtest.txt\x1b[0m");
        assert_eq!(folder, "\x1b[32;41mtmp\x1b[0m");

        let (file, folder) = paint_both("no=0;46");
        assert_eq!(file, "\x1b[0;46mtest.txt\x1b[0m");
        assert_eq!(folder, "\x1b[01;34mtmp\x1b[0m");
    }

    #[test]
    fn test_extension_rules() {
        let (file, folder) = paint_both("*.text=0;46");
        assert_eq!(file, "test.txt");
        assert_eq!(folder, "\x1b[01;34mtmp\x1b[0m");

        let (file, folder) = paint_both("*.txt=0;46");
        assert_eq!(file, "\x1b[0;46mtest.txt\x1b[0m");
        assert_eq!(folder, "\x1b[01;34mtmp\x1b[0m");
    }

    #[test]
    fn test_extension_beats_file_indicator() {
        let (file, _) = paint_both("fi=0;44:*.txt=1;33");
        assert_eq!(file, "\x1b[1;33mtest.txt\x1b[0m");
    }

    #[test]
    fn test_custom_reset_and_end_code() {
        let (file, _) = paint_both("fi=1:rs=7");
        assert_eq!(file, "\x1b[1mtest.txt\x1b[7m");

        let (file, _) = paint_both("fi=1:ec=\\e[99m");
        assert_eq!(file, "\x1b[1mtest.txt\x1b[99m");
    }

    #[test]
    fn test_disabled_directory_is_unstyled() {
        let (_, folder) = paint_both("di=");
        assert_eq!(folder, "tmp");
    }

    #[test]
    fn test_paint_is_pure() {
        let painter = GnuPainter::new("di=32;41:fi=0;44").unwrap();
        let file = file();
        assert_eq!(
            painter.paint(&file.name, &file),
            painter.paint(&file.name, &file)
        );
    }
}
