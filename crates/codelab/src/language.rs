//! Playground languages
//!
//! The four languages the playground offers, with their Judge0 language ids
//! and starter programs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Judge0 id used when a tag is not one of ours (Python 3)
pub const FALLBACK_LANGUAGE_ID: u32 = 71;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  Python,
  JavaScript,
  Java,
  Cpp,
}

impl Language {
  pub const ALL: [Language; 4] =
    [Language::Python, Language::JavaScript, Language::Java, Language::Cpp];

  pub fn tag(self) -> &'static str {
    match self {
      Language::Python => "python",
      Language::JavaScript => "javascript",
      Language::Java => "java",
      Language::Cpp => "cpp",
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Language::Python => "Python",
      Language::JavaScript => "JavaScript",
      Language::Java => "Java",
      Language::Cpp => "C++",
    }
  }

  /// Judge0 CE language id: Python 3, Node.js, Java, C++ (GCC 9.2.0)
  pub fn judge0_id(self) -> u32 {
    match self {
      Language::Python => 71,
      Language::JavaScript => 63,
      Language::Java => 62,
      Language::Cpp => 50,
    }
  }

  pub fn from_tag(tag: &str) -> Option<Self> {
    let tag = tag.trim();
    Language::ALL.into_iter().find(|language| language.tag().eq_ignore_ascii_case(tag))
  }

  /// Guess from a file extension
  pub fn from_path(path: &Path) -> Option<Self> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
      "py" => Some(Language::Python),
      "js" | "mjs" | "cjs" => Some(Language::JavaScript),
      "java" => Some(Language::Java),
      "cpp" | "cc" | "cxx" | "hpp" | "h" => Some(Language::Cpp),
      _ => None,
    }
  }

  pub fn sample(self) -> &'static str {
    match self {
      Language::Python => PYTHON_SAMPLE,
      Language::JavaScript => JAVASCRIPT_SAMPLE,
      Language::Java => JAVA_SAMPLE,
      Language::Cpp => CPP_SAMPLE,
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.tag())
  }
}

/// Execution language id for any tag, unknown tags run as Python
pub fn judge0_language_id(tag: &str) -> u32 {
  Language::from_tag(tag).map_or(FALLBACK_LANGUAGE_ID, Language::judge0_id)
}

const PYTHON_SAMPLE: &str = concat!(
  "# Welcome to CodeLab!\n",
  "# Select a language and start coding\n",
  "\n",
  "def hello_world():\n",
  "    print(\"Hello, World!\")\n",
  "    return \"Success\"\n",
  "\n",
  "hello_world()",
);

const JAVASCRIPT_SAMPLE: &str = concat!(
  "// Welcome to CodeLab!\n",
  "// Select a language and start coding\n",
  "\n",
  "function factorial(n) {\n",
  "  if (n <= 1) return 1;\n",
  "  return n * factorial(n - 1);\n",
  "}\n",
  "\n",
  "console.log(factorial(5));",
);

const JAVA_SAMPLE: &str = concat!(
  "// Welcome to CodeLab!\n",
  "// Select a language and start coding\n",
  "\n",
  "public class Main {\n",
  "    public static void main(String[] args) {\n",
  "        System.out.println(\"Hello, World!\");\n",
  "        System.out.println(fibonacci(10));\n",
  "    }\n",
  "    \n",
  "    public static int fibonacci(int n) {\n",
  "        if (n <= 1) return n;\n",
  "        return fibonacci(n - 1) + fibonacci(n - 2);\n",
  "    }\n",
  "}",
);

const CPP_SAMPLE: &str = concat!(
  "// Welcome to CodeLab!\n",
  "// Select a language and start coding\n",
  "\n",
  "#include <iostream>\n",
  "\n",
  "int fibonacci(int n) {\n",
  "    if (n <= 1)\n",
  "        return n;\n",
  "    return fibonacci(n - 1) + fibonacci(n - 2);\n",
  "}\n",
  "\n",
  "int main() {\n",
  "    std::cout << \"Hello, World!\\n\";\n",
  "    std::cout << fibonacci(10) << \"\\n\";\n",
  "    return 0;\n",
  "}",
);
