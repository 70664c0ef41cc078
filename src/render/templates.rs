//! Fixed LaTeX fragments that make up the lifepath document.

/// Document preamble, emitted once before any section.
pub const PREAMBLE: &str = r"\documentclass[12pt]{report}
\usepackage{geometry}
\usepackage{array}
\usepackage{tabularx}
\usepackage{multicol}
\usepackage{color, colortbl}
\usepackage{changepage}
\definecolor{Gray}{gray}{0.9}\begin{document}
\newgeometry{margin=1cm}
\noindent
";

/// Closes one lifepath block.
pub const RECORD_CLOSE: &str = r"\vspace*{10pt} \end{minipage}";

/// Document closing, emitted once at the end.
pub const CLOSING: &str = r"
\end{document}
";

pub const SKILLS_LABEL: &str = "Skills";
pub const TRAITS_LABEL: &str = "Traits";
pub const REQUIREMENTS_LABEL: &str = "Requirements";
pub const SPECIAL_LABEL: &str = "Special";

/// Shaded table row opening a lifepath block.
pub fn record_row(name: &str, years: &str, res: &str, stats: &str, leads: &str) -> String {
    format!(
        "\\begin{{minipage}}{{\\columnwidth}}\n\
         \\begin{{tabularx}}{{\\textwidth}}{{>{{\\raggedright}}p{{3.5cm}}p{{0.85cm}}p{{0.85cm}}p{{0.85cm}}X}}\n\
         \\rowcolor{{Gray}} \\textbf{{{name}}} & {years}yrs & {res} & {stats} & \\textit{{{leads}}}\n\
         \\end{{tabularx}} \\vspace*{{-5pt}}"
    )
}

/// Indented labelled line under the row (skills, traits, ...).
pub fn detail_block(label: &str, body: &str) -> String {
    format!(
        "\\begin{{adjustwidth}}{{1cm}}{{}}\\textbf{{\n\\textit{{{label}:}}}} {body}\\end{{adjustwidth}}"
    )
}

/// `\section*` heading opening a run of lifepaths.
pub fn section_heading(title: &str) -> String {
    format!("\\section*{{{title}}}")
}
