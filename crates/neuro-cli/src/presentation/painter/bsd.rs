use neuro_types::{FileStatus, FileStatusType};
use owo_colors::{AnsiColors, OwoColorize, Style};

/// Positions of the fg/bg letter pairs in an `LSCOLORS` string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BsdAttribute {
    Directory = 0,
    SymbolicLink,
    Socket,
    Pipe,
    Executable,
    BlockSpecial,
    CharacterSpecial,
    ExecutableSetUid,
    ExecutableSetGid,
    DirectoryWritableSticky,
    DirectoryWritable,
}

const SLOTS: usize = 11;

#[derive(Debug, Clone, Copy, Default)]
struct SlotColor {
    fg: Option<AnsiColors>,
    bg: Option<AnsiColors>,
    bold: bool,
    underline: bool,
}

impl SlotColor {
    fn parse(fg: char, bg: char) -> Self {
        Self {
            fg: letter_color(fg),
            bg: letter_color(bg),
            bold: fg.is_ascii_uppercase() && letter_color(fg).is_some(),
            underline: bg.is_ascii_uppercase() && letter_color(bg).is_some(),
        }
    }

    fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && !self.bold && !self.underline
    }

    fn style(&self) -> Style {
        let mut style = Style::new();
        if let Some(fg) = self.fg {
            style = style.color(fg);
        }
        if let Some(bg) = self.bg {
            style = style.on_color(bg);
        }
        if self.bold {
            style = style.bold();
        }
        if self.underline {
            style = style.underline();
        }
        style
    }
}

/// `a`..`h` map to the eight ANSI colors; `x` and anything unknown mean
/// the terminal default.
fn letter_color(letter: char) -> Option<AnsiColors> {
    match letter.to_ascii_lowercase() {
        'a' => Some(AnsiColors::Black),
        'b' => Some(AnsiColors::Red),
        'c' => Some(AnsiColors::Green),
        'd' => Some(AnsiColors::Yellow),
        'e' => Some(AnsiColors::Blue),
        'f' => Some(AnsiColors::Magenta),
        'g' => Some(AnsiColors::Cyan),
        'h' => Some(AnsiColors::White),
        _ => None,
    }
}

/// Paints names the way BSD `ls -G` does with `LSCOLORS`.
#[derive(Debug, Clone)]
pub struct BsdPainter {
    raw: Vec<String>,
    slots: [SlotColor; SLOTS],
}

impl BsdPainter {
    /// Missing or short specs leave the remaining slots at the default color.
    pub fn new(spec: &str) -> Self {
        let letters: Vec<char> = spec.chars().collect();
        let mut raw = Vec::with_capacity(SLOTS);
        let mut slots = [SlotColor::default(); SLOTS];

        for (index, pair) in letters.chunks(2).take(SLOTS).enumerate() {
            if let [fg, bg] = pair {
                raw.push(format!("{}{}", fg, bg));
                slots[index] = SlotColor::parse(*fg, *bg);
            }
        }

        Self { raw, slots }
    }

    /// The two letters configured for `attribute`, as written.
    pub fn code(&self, attribute: BsdAttribute) -> Option<&str> {
        self.raw.get(attribute as usize).map(String::as_str)
    }

    pub fn paint(&self, name: &str, file: &FileStatus) -> String {
        let attribute = match file.file_type {
            FileStatusType::Directory => BsdAttribute::Directory,
            FileStatusType::File => return name.to_string(),
        };

        let slot = self.slots[attribute as usize];
        if slot.is_plain() {
            return name.to_string();
        }
        name.style(slot.style()).to_string()
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

    #[test]
    fn test_slots_are_read_in_pairs() {
        let painter = BsdPainter::new("exfxcxdxbxegedabagacad");
        assert_eq!(painter.code(BsdAttribute::Directory), Some("ex"));
        assert_eq!(painter.code(BsdAttribute::SymbolicLink), Some("fx"));
        assert_eq!(painter.code(BsdAttribute::DirectoryWritable), Some("ad"));
    }

    #[test]
    fn test_directory_foreground() {
        let painter = BsdPainter::new("exfxcxdxbxegedabagacad");
        let (file, folder) = (file(), folder());

        assert_eq!(painter.paint(&file.name, &file), "test.txt");
        assert_eq!(
            painter.paint(&folder.name, &folder),
            "tmp".style(Style::new().color(AnsiColors::Blue)).to_string()
        );
    }

    #[test]
    fn test_uppercase_foreground_is_bold() {
        let painter = BsdPainter::new("Eafxcxdxbxegedabagacad");
        let (file, folder) = (file(), folder());

        let expected = Style::new()
            .color(AnsiColors::Blue)
            .on_color(AnsiColors::Black)
            .bold();
        assert_eq!(painter.paint(&file.name, &file), "test.txt");
        assert_eq!(
            painter.paint(&folder.name, &folder),
            "tmp".style(expected).to_string()
        );
    }

    #[test]
    fn test_uppercase_background_is_underlined() {
        let painter = BsdPainter::new("eB");
        let folder = folder();
        let expected = Style::new()
            .color(AnsiColors::Blue)
            .on_color(AnsiColors::Red)
            .underline();
        assert_eq!(
            painter.paint(&folder.name, &folder),
            "tmp".style(expected).to_string()
        );
    }

    #[test]
    fn test_default_slot_is_unstyled() {
        let painter = BsdPainter::new("xxxxxxxxxxxxxxxxxxxxxx");
        let (file, folder) = (file(), folder());
        assert_eq!(painter.paint(&file.name, &file), "test.txt");
        assert_eq!(painter.paint(&folder.name, &folder), "tmp");
    }

    #[test]
    fn test_short_spec() {
        let painter = BsdPainter::new("e");
        assert_eq!(painter.code(BsdAttribute::Directory), None);
        let folder = folder();
        assert_eq!(painter.paint(&folder.name, &folder), "tmp");
    }

    #[test]
    fn test_all_ex_spec_paints_directories_blue_only() {
        let painter = BsdPainter::new("exexexexexexexexexexex");
        let (file, folder) = (file(), folder());

        assert_eq!(painter.paint(&file.name, &file), "test.txt");
        assert_eq!(painter.paint(&folder.name, &folder), "\x1b[34mtmp\x1b[0m");
    }
}
