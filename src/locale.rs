//! Localized user-facing text.
//!
//! The active locale comes from `LANG`. Finnish is chosen only for the exact
//! Finnish UTF-8 locale; everything else, including a missing variable,
//! falls back to English.

use crate::args::{flag_registry, Flag};
use crate::report::quoted_list;

/// `LANG` value that selects Finnish.
pub const FINNISH_LANG: &str = "fi_FI.UTF-8";

/// Supported output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    Finnish,
    #[default]
    English,
}

impl Locale {
    /// Pick the locale for a `LANG` value.
    pub fn from_lang(lang: Option<&str>) -> Self {
        match lang {
            Some(FINNISH_LANG) => Locale::Finnish,
            _ => Locale::English,
        }
    }

    /// Text producer for this locale.
    pub fn texts<'a>(self, program: &'a str, version: &'a str) -> Texts<'a> {
        Texts {
            locale: self,
            program,
            version,
        }
    }
}

/// Produces every message `ppi` prints, in one locale.
#[derive(Debug, Clone, Copy)]
pub struct Texts<'a> {
    locale: Locale,
    program: &'a str,
    version: &'a str,
}

impl Texts<'_> {
    pub fn description(&self) -> String {
        let message = match self.locale {
            Locale::Finnish => "python projekti generaattori.",
            Locale::English => "python project generator.",
        };
        format!("{} {}, {}", self.program, self.version, message)
    }

    pub fn usage(&self) -> String {
        match self.locale {
            Locale::Finnish => format!("Käyttö: {} [valitsimet] <nimi>", self.program),
            Locale::English => format!("Usage: {} [options] <name>", self.program),
        }
    }

    /// Options block, one line per registry flag.
    pub fn help(&self) -> String {
        let header = match self.locale {
            Locale::Finnish => "Valitsimet:",
            Locale::English => "Options:",
        };

        // Finnish option lines are indented, English ones are not.
        let indent = match self.locale {
            Locale::Finnish => "  ",
            Locale::English => "",
        };

        let mut text = format!("\n{header}\n");
        for def in flag_registry() {
            let label = format!("-{},  {}", def.short, def.long);
            text.push_str(&format!(
                "{indent}{:.<18} {}\n",
                label,
                self.flag_description(def.flag)
            ));
        }
        text
    }

    /// Hint printed after error messages.
    pub fn additional_help(&self) -> String {
        match self.locale {
            Locale::Finnish => format!(
                "Kokeile '{} --help' saadaksesi lisätietoja.",
                self.program
            ),
            Locale::English => format!("Try '{} --help' for more information.", self.program),
        }
    }

    pub fn success(&self, project: &str) -> String {
        match self.locale {
            Locale::Finnish => format!("{}: \"{}\" luotu! ✨✨", self.program, project),
            Locale::English => format!("{}: \"{}\" created! ✨✨", self.program, project),
        }
    }

    pub fn invalid_arguments(&self, args: &[String]) -> String {
        match self.locale {
            Locale::Finnish => format!(
                "{}: virhe: virheelliset argumentit: {}",
                self.program,
                quoted_list(args)
            ),
            Locale::English => format!(
                "{}: error: invalid arguments: {}",
                self.program,
                quoted_list(args)
            ),
        }
    }

    pub fn extra_arguments(&self, args: &[String]) -> String {
        match self.locale {
            Locale::Finnish => format!(
                "{}: virhe: ylimääräiset argumentit: {}",
                self.program,
                quoted_list(args)
            ),
            Locale::English => format!(
                "{}: error: extra arguments: {}",
                self.program,
                quoted_list(args)
            ),
        }
    }

    pub fn directory_exists(&self, name: &str) -> String {
        match self.locale {
            Locale::Finnish => format!(
                "{}: virhe: kansio '{}' on jo olemassa",
                self.program, name
            ),
            Locale::English => format!("{}: error: dir '{}' already exists", self.program, name),
        }
    }

    /// Any other failure while generating the project.
    pub fn failure(&self, reason: &str) -> String {
        match self.locale {
            Locale::Finnish => format!("{}: virhe: {}", self.program, reason),
            Locale::English => format!("{}: error: {}", self.program, reason),
        }
    }

    fn flag_description(&self, flag: Flag) -> String {
        match (self.locale, flag) {
            (Locale::Finnish, Flag::Annotate) => {
                "Generoi lähdetiedostot tyyppiviittauksilla.".into()
            }
            (Locale::Finnish, Flag::Quiet) => "Älä tulosta mitään stdout:iin.".into(),
            (Locale::Finnish, Flag::GitInit) => "Alusta projekti git repona.".into(),
            (Locale::Finnish, Flag::Help) => "Tulosta tämä viesti.".into(),
            (Locale::Finnish, Flag::Version) => format!("Tulosta {} versio.", self.program),
            (Locale::English, Flag::Annotate) => "Generate source files with type hints.".into(),
            (Locale::English, Flag::Quiet) => "Don't print anything to stdout.".into(),
            (Locale::English, Flag::GitInit) => "Initialize project as git-repo.".into(),
            (Locale::English, Flag::Help) => "Print this message.".into(),
            (Locale::English, Flag::Version) => format!("Print {} version.", self.program),
        }
    }
}
