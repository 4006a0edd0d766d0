//! File templates for the generated project.
//!
//! `__NAME__` is replaced with the project name, `__DATE__` with the man page
//! stamp (e.g. "Oct 2026").

const README: &str = "# About

# Installation

# Requirements
";

const CHANGELOG: &str = "# Changelog

## [unreleased](link-to-release) -- month day year
### Added
";

const MANIFEST: &str = "include LICENSE.txt
graft docs*/
graft tests*/
";

const GITIGNORE: &str = "# Compiled Python modules
*.pyc

# Virtual environment
venv/

# Setuptools distribution folder
dist/

# Man-pages
docs/*.1

# Python egg metadata
*.egg-info/
*.egg
*__pycache__/
";

const MAKEFILE: &str = r#"PROG = __NAME__
DOCS = docs
PREFIX = $(HOME)/.local
MAN_SRC = $(shell pwd)/$(DOCS)/$(PROG).1
MAN_DST = $(PREFIX)/man/man1/
PYTHON = python3

.PHONY: build
build:
	@echo "Building distribution packages..."
	rm -rf dist/
	$(PYTHON) -m build

.PHONY: check
check:
	@command -v twine &>/dev/null || $(PYTHON) -m pip install -qq twine
	@echo "Checking that brief / long descriptions in setup.py are valid..."
	twine check dist/*

.PHONY: upload
upload:
	@command -v twine &>/dev/null || $(PYTHON) -m pip install -qq twine
	@echo "Attempting to upload $(PROG) to PyPI..."
	twine upload dist/*

.PHONY: clean
clean:
	@echo "Cleaning distribution packages..."
	rm -rf dist/

.PHONY: man
man:
	pandoc $(DOCS)/$(PROG).1.md -s -t man -o $(DOCS)/$(PROG).1

.PHONY: install
install:
	@echo "Installing $(PROG)..."
	$(PYTHON) -m pip uninstall -qq --yes $(PROG)
	$(PYTHON) -m pip install -qq .
	@echo "Install successful."

.PHONY: install-editable
install-editable:
	@echo "Installing $(PROG)..."
	$(PYTHON) -m pip uninstall -qq --yes $(PROG)
	$(PYTHON) -m pip install -qq -e .
	@echo "Install successful."

.PHONY: uninstall
uninstall:
	@echo "Uninstalling $(PROG)..."
	$(PYTHON) -m pip uninstall -qq --yes $(PROG)
	@echo "Uninstall successful."

.PHONY: tests
tests:
	@echo "Running tests..."
	$(PYTHON) -m unittest -v
"#;

// Header, heading and body lines end in two spaces: a markdown hard break.
const MAN_PAGE: &str = "% __UPPER__(1) __NAME__ 0.0.0  \n\
% Author's name  \n\
% __DATE__  \n\
\n\
# NAME  \n\
__NAME__ -- Short, one-line description of the program  \n\
\n\
# SYNOPSIS  \n\
**__NAME__**  \n\
\n\
# DESCRIPTION  \n\
Longer, detailed description of the program  \n\
\n\
# OPTIONS  \n\
All the options of the program, in the following format:\n\
**short-option**, **long-option**\n\
: Short description of what the option(s) do\n\
";

// The readme() helper is the only difference between the two setup.py flavours.
const SETUP_PY: &str = r#"from setuptools import setup


__README__
    with open("README.md", "r", encoding="utf-8") as f:
        return f.read()


setup(
    # Name of your project. When you publish this
    # package to PyPI, this name will be registered for you
    name="__NAME__",  # Required

    # Version?
    version="",  # Required

    # What does your project do?
    #description="",  # Optional

    # Longer description, that users will see when
    # they visit your project at PyPI
    #long_description=readme(),  # Optional
    #long_description_content_type="text/markdown",  # Optional

    # Who owns this project?
    #author="",  # Optional
    #author_email="",  # Optional

    # More info at: https://pypi.org/classifiers/
    classifiers=[  # Optional
        #"Development Status :: 3 - Alpha",
        #"Intended Audience :: Developers",
        #"Programming Language :: Python :: 3",
    ],

    #keywords="",  # Optional

    # Is your project larger than just few files?
    # Use 'py_modules' instead for single-file projects.
    packages=["__NAME__"],  # Required

    #python_requires=">=3.8",  # Optional
    #install_requires=[],  # Optional

    # Need to install, for example, man-pages that your project has?
    #data_files=[("man/man1", ["docs/__NAME__.1"])],  # Optional

    # The following would provide a command called '__NAME__' which
    # executes the function 'main' from file 'main' from package '__NAME__':
    entry_points={  # Optional
        "console_scripts": [
            #"__NAME__=__NAME__.main:main",
        ]
    },

    include_package_data=True,  # Optional
    zip_safe=False,  # Optional

    project_urls={  # Optional
        #"Bug Reports": "https://github.com...",
        #"Source": "https://github.com..."
    }
)
"#;

const MAIN_PY_ANNOTATED: &str = r#""""What does this program do? Document it in this docstring."""

__program__: str = "__NAME__"
__author__: str = ""
__copyright__: str = ""
__credits__: list = []
__license__: str = ""
__version__: str = ""
__maintainer__: str = ""
__email__: str = ""
__status__: str = ""


def main() -> None:
    """Main function."""
    pass


if __name__ == "__main__":
    main()
"#;

const MAIN_PY_PLAIN: &str = r#""""What does this program do? Document it in this docstring."""

__program__ = "__NAME__"
__author__ = ""
__copyright__ = ""
__credits__ = []
__license__ = ""
__version__ = ""
__maintainer__ = ""
__email__ = ""
__status__ = ""


def main():
    """Main function."""
    pass


if __name__ == "__main__":
    main()
"#;

fn fill(template: &str, name: &str) -> String {
    template.replace("__NAME__", name)
}

pub fn readme() -> String {
    README.to_string()
}

pub fn changelog() -> String {
    CHANGELOG.to_string()
}

pub fn manifest() -> String {
    MANIFEST.to_string()
}

pub fn gitignore() -> String {
    GITIGNORE.to_string()
}

pub fn makefile(name: &str) -> String {
    fill(MAKEFILE, name)
}

pub fn man_page(name: &str, date: &str) -> String {
    fill(MAN_PAGE, name)
        .replace("__UPPER__", &name.to_uppercase())
        .replace("__DATE__", date)
}

pub fn setup_py(name: &str, annotate: bool) -> String {
    let readme = if annotate {
        "def readme() -> str:\n    \"\"\"Long description.\"\"\""
    } else {
        "def readme():\n    \"\"\"Long description.\"\"\""
    };
    fill(SETUP_PY, name).replace("__README__", readme)
}

pub fn main_py(name: &str, annotate: bool) -> String {
    if annotate {
        fill(MAIN_PY_ANNOTATED, name)
    } else {
        fill(MAIN_PY_PLAIN, name)
    }
}

/// `__init__.py` is created empty.
pub fn init_py() -> String {
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn makefile_names_the_program() {
        let text = makefile("hello");
        assert!(text.starts_with("PROG = hello\n"));
        assert!(text.contains("\t$(PYTHON) -m build\n"));
    }

    #[test]
    fn man_page_header() {
        let text = man_page("hello", "Oct 2026");
        assert!(text.starts_with("% HELLO(1) hello 0.0.0  \n% Author's name  \n% Oct 2026  \n\n"));
        assert!(text.contains("\n# NAME  \nhello -- Short, one-line description of the program  \n"));
        assert!(text.contains("\n# OPTIONS  \nAll the options of the program, in the following format:\n"));
        assert!(text.ends_with("\n: Short description of what the option(s) do\n"));
        assert!(!text.contains("__"));
    }

    #[test]
    fn annotate_switches_type_hints() {
        assert!(main_py("hello", true).contains("def main() -> None:"));
        assert!(main_py("hello", false).contains("def main():"));
        assert!(setup_py("hello", true).contains("def readme() -> str:"));
        assert!(setup_py("hello", false).contains("def readme():"));
        assert!(setup_py("hello", false).contains("packages=[\"hello\"]"));
    }
}
