// ============================================================================
// Test Fixtures
// Builders for well-formed COTAHIST lines
// ============================================================================

use super::field_spec::{data_fields, field_offset};

/// Field values of a standard-lot PETR4 trade; text is space-padded on build
const PETR4: [(&str, &str); 25] = [
    ("EXCDAT", "20200102"),
    ("CODBDI", "02"),
    ("CODNEG", "PETR4"),
    ("TPMERC", "010"),
    ("NOMRES", "PETROBRAS"),
    ("ESPECI", "PN      N2"),
    ("PRAZOT", ""),
    ("MODREF", "R$"),
    ("PREABE", "0000000001050"),
    ("PREMAX", "0000000001100"),
    ("PREMIN", "0000000001025"),
    ("PREMED", "0000000001070"),
    ("PREULT", "0000000001080"),
    ("PREOFC", "0000000001081"),
    ("PREOFV", "0000000001079"),
    ("TOTNEG", "00012"),
    ("QUATOT", "000000000000003400"),
    ("VOLTOT", "000000000003672000"),
    ("PREEXE", "0000000000000"),
    ("INDOPC", "0"),
    ("DATVEN", "99991231"),
    ("FATCOT", "0000001"),
    ("PTOEXE", "0000000000000"),
    ("CODISI", "BRPETRACNPR6"),
    ("DISMES", "142"),
];

/// A complete 245-byte data line
pub(crate) fn data_line() -> String {
    let mut line = String::from("01");
    for (spec, (name, value)) in data_fields().iter().zip(PETR4) {
        assert_eq!(spec.name, name);
        line.push_str(&format!("{:<width$}", value, width = spec.width));
    }
    line
}

/// Copy of `line` with one field overwritten (space-padded to its width)
pub(crate) fn with_field(line: &str, name: &str, value: &str) -> String {
    let spec = data_fields()
        .iter()
        .find(|spec| spec.name == name)
        .unwrap();
    let offset = field_offset(name).unwrap();

    let mut patched = line.to_string();
    patched.replace_range(
        offset..offset + spec.width,
        &format!("{:<width$}", value, width = spec.width),
    );
    patched
}
