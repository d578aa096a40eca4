//! Built-in example table: the alpha-frequency/temporal-resolution
//! correlations compiled by Samaha & Romei (2023), *Journal of Cognitive
//! Neuroscience*. Signs are oriented so that positive values support the
//! theory under test.

use metacorr_model::{StudyRecord, StudySet};

const BUILTIN_STUDIES: &[(&str, u64, f64)] = &[
    ("Sokoliuk & VanRullen (2013)", 10, 0.81),
    ("Minami & Amano (2017)", 12, 0.84),
    ("Gotz et al. (2013)", 23, 0.60),
    ("May et al. (2015)", 28, 0.44),
    ("Baumgarten et al. (2018)", 43, 0.41),
    ("Shen et al. (2019)", 17, 0.72),
    ("Zhang et al. (2019)", 18, 0.55),
    ("Ro (2019)", 9, 0.58),
    ("Gulbinaite, et al. (2017)", 30, 0.43),
    ("Samaha & Postle (2015)", 20, 0.56),
    ("Gray & Emmanouil (2019)", 32, 0.24),
    ("Drewes et al. (2022)", 16, 0.43),
    ("Deodato & Melcher (2023)", 28, 0.47),
    ("Buergers & Noppeney (2022)", 20, 0.12),
    ("Cecere et al. (2015) exp. 1", 22, 0.70),
    ("Cecere et al. (2015) exp. 2", 12, 0.71),
    ("Venskus & Hughes (2021)", 38, 0.32),
    ("Cooke et al. (2019)", 51, 0.52),
    ("Keil & Senkowski (2017)", 26, 0.53),
    ("Noguchi (2022)", 29, 0.20),
    ("Kristofferson (1967a)", 8, 0.64),
    ("Kristofferson (1967b)", 13, 0.74),
    ("Bastiaansen et al. (2020)", 22, 0.44),
    ("Grabot et al. (2017)", 10, 0.09),
    ("London et al. (2022)", 40, 0.24),
    ("Ronconi et al. (2023) exp. 1", 17, 0.85),
    ("Ronconi et al. (2023) exp. 2", 17, 0.35),
];

/// The example study set, ready for analysis.
pub fn builtin_study_set() -> StudySet {
    BUILTIN_STUDIES
        .iter()
        .map(|&(name, n, r)| StudyRecord::named(name, n, r))
        .collect()
}

/// The example table rendered as CSV text, usable as a starting table for
/// `analyze`.
pub fn builtin_csv() -> String {
    let mut out = String::from("Study name,n,r\n");
    for &(name, n, r) in BUILTIN_STUDIES {
        let quoted = if name.contains(',') {
            format!("\"{name}\"")
        } else {
            name.to_owned()
        };
        out.push_str(&format!("{quoted},{n},{r}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_is_fully_valid() {
        let set = builtin_study_set();
        assert_eq!(set.len(), 27);
        assert_eq!(set.cleaned().len(), set.len());
    }

    #[test]
    fn builtin_csv_has_one_row_per_study() {
        let csv = builtin_csv();
        assert_eq!(csv.lines().count(), 28);
        assert!(csv.starts_with("Study name,n,r\n"));
        assert!(csv.contains("\"Gulbinaite, et al. (2017)\",30,0.43"));
    }
}
