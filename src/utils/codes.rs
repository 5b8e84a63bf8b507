//! Generación de códigos secuenciales legibles (PROG001, RUT001, ...)
//!
//! El siguiente código se deriva del último registro existente, que el
//! repositorio obtiene con `find_top_by_code_desc`. La función es pura:
//! no toca el store ni mantiene estado, la orquestación vive en los
//! servicios.

/// Prefijo de códigos de programa
pub const PROGRAM_PREFIX: &str = "PROG";
/// Prefijo de códigos de ruta
pub const ROUTE_PREFIX: &str = "RUT";
/// Prefijo de códigos de horario
pub const SCHEDULE_PREFIX: &str = "HOR";
/// Prefijo de códigos de tarifa
pub const FARE_PREFIX: &str = "TAR";

/// Calcula el siguiente código en formato `<prefijo><número con padding a 3>`.
///
/// - Sin registro previo: `<prefijo>001`.
/// - Sufijo ilegible (vacío, no numérico, desbordado): se trata como 0,
///   por lo que el resultado vuelve a ser `<prefijo>001`.
/// - A partir de 999 el sufijo simplemente crece (`<prefijo>1000`), sin
///   re-padding.
pub fn next_code(last_code: Option<&str>, prefix: &str) -> String {
    let last = last_code.map_or(0, |code| numeric_suffix(code, prefix));
    format!("{}{:03}", prefix, last + 1)
}

fn numeric_suffix(code: &str, prefix: &str) -> u64 {
    let Some(rest) = code.strip_prefix(prefix) else {
        return 0;
    };
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    // Un sufijo más largo que u64 también cae al valor por defecto
    rest.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_code_when_no_previous_record() {
        assert_eq!(next_code(None, PROGRAM_PREFIX), "PROG001");
        assert_eq!(next_code(None, FARE_PREFIX), "TAR001");
    }

    #[test]
    fn test_increments_numeric_suffix() {
        assert_eq!(next_code(Some("PROG001"), PROGRAM_PREFIX), "PROG002");
        assert_eq!(next_code(Some("PROG009"), PROGRAM_PREFIX), "PROG010");
        assert_eq!(next_code(Some("RUT099"), ROUTE_PREFIX), "RUT100");
        assert_eq!(next_code(Some("HOR998"), SCHEDULE_PREFIX), "HOR999");
    }

    #[test]
    fn test_grows_past_three_digits_without_repadding() {
        assert_eq!(next_code(Some("TAR999"), FARE_PREFIX), "TAR1000");
        assert_eq!(next_code(Some("TAR1000"), FARE_PREFIX), "TAR1001");
    }

    #[test]
    fn test_malformed_code_falls_back_to_initial() {
        assert_eq!(next_code(Some("BAD"), PROGRAM_PREFIX), "PROG001");
        assert_eq!(next_code(Some("PROGabc"), PROGRAM_PREFIX), "PROG001");
        assert_eq!(next_code(Some("PROG12x"), PROGRAM_PREFIX), "PROG001");
    }

    #[test]
    fn test_empty_suffix_falls_back_to_initial() {
        assert_eq!(next_code(Some("TAR"), FARE_PREFIX), "TAR001");
        assert_eq!(next_code(Some(""), FARE_PREFIX), "TAR001");
    }

    #[test]
    fn test_overflowing_suffix_falls_back_to_initial() {
        // Más allá del rango de u64
        assert_eq!(
            next_code(Some("TAR99999999999999999999"), FARE_PREFIX),
            "TAR001"
        );
    }

    #[test]
    fn test_pure_function_is_idempotent() {
        for _ in 0..10 {
            assert_eq!(next_code(Some("PROG041"), PROGRAM_PREFIX), "PROG042");
        }
    }
}
