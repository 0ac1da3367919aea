//! File name painters for storage listings.

pub mod bsd;
pub mod color_spec;
pub mod gnu;

pub use bsd::{BsdAttribute, BsdPainter};
pub use color_spec::{ColorRuleSet, ColorSpecError, Indicator};
pub use gnu::GnuPainter;

use neuro_types::FileStatus;

/// Color configuration as found in the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorEnv {
    /// GNU syntax (`LS_COLORS`)
    pub ls_colors: Option<String>,
    /// BSD syntax (`LSCOLORS`)
    pub lscolors: Option<String>,
}

impl ColorEnv {
    pub fn from_env() -> Self {
        Self {
            ls_colors: std::env::var("LS_COLORS").ok(),
            lscolors: std::env::var("LSCOLORS").ok(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum Painter {
    #[default]
    None,
    Gnu(GnuPainter),
    Bsd(BsdPainter),
}

impl Painter {
    /// Pick a painter. GNU syntax wins over BSD when both are set.
    pub fn detect(color_enabled: bool, env: &ColorEnv) -> Result<Self, ColorSpecError> {
        if !color_enabled {
            return Ok(Painter::None);
        }

        if let Some(spec) = env.ls_colors.as_deref().filter(|s| !s.is_empty()) {
            tracing::debug!("using GNU color spec");
            return Ok(Painter::Gnu(GnuPainter::new(spec)?));
        }

        if let Some(spec) = env.lscolors.as_deref().filter(|s| !s.is_empty()) {
            tracing::debug!("using BSD color spec");
            return Ok(Painter::Bsd(BsdPainter::new(spec)));
        }

        Ok(Painter::None)
    }

    pub fn paint(&self, name: &str, file: &FileStatus) -> String {
        match self {
            Painter::None => name.to_string(),
            Painter::Gnu(painter) => painter.paint(name, file),
            Painter::Bsd(painter) => painter.paint(name, file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuro_types::{FilePermission, FileStatusType};

    fn env(ls_colors: &str, lscolors: &str) -> ColorEnv {
        ColorEnv {
            ls_colors: Some(ls_colors.to_string()),
            lscolors: Some(lscolors.to_string()),
        }
    }

    #[test]
    fn test_none_painter_is_identity() {
        let file = FileStatus::new(
            "File1",
            2048,
            FileStatusType::File,
            1514775600,
            FilePermission::Read,
        );
        assert_eq!(Painter::None.paint(&file.name, &file), "File1");
    }

    #[test]
    fn test_detection() {
        let painter = Painter::detect(true, &env("", "")).unwrap();
        assert!(matches!(painter, Painter::None));

        let painter = Painter::detect(true, &ColorEnv::default()).unwrap();
        assert!(matches!(painter, Painter::None));

        let both = env("di=32;41:fi=0;44:no=0;46", "exfxcxdxbxegedabagacad");
        assert!(matches!(
            Painter::detect(false, &both).unwrap(),
            Painter::None
        ));
        assert!(matches!(
            Painter::detect(true, &both).unwrap(),
            Painter::Gnu(_)
        ));

        let gnu_only = env("di=32;41:fi=0;44:no=0;46", "");
        assert!(matches!(
            Painter::detect(true, &gnu_only).unwrap(),
            Painter::Gnu(_)
        ));

        let bsd_only = env("", "exfxcxdxbxegedabagacad");
        assert!(matches!(
            Painter::detect(true, &bsd_only).unwrap(),
            Painter::Bsd(_)
        ));
    }

    #[test]
    fn test_bad_gnu_spec_aborts_detection() {
        let broken = env("rs=^1", "exfxcxdxbxegedabagacad");
        assert!(Painter::detect(true, &broken).is_err());
        // color off never parses LS_COLORS
        assert!(Painter::detect(false, &broken).is_ok());
    }

    #[test]
    fn test_distinct_codes_give_distinct_output() {
        let painter = Painter::detect(true, &env("di=32;41:fi=0;44", "")).unwrap();
        let dir = FileStatus::new("x", 0, FileStatusType::Directory, 0, FilePermission::Read);
        let file = FileStatus::new("x", 0, FileStatusType::File, 0, FilePermission::Read);
        assert_ne!(painter.paint("x", &dir), painter.paint("x", &file));
        assert_eq!(painter.paint("x", &dir), painter.paint("x", &dir));
    }
}
