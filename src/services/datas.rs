// src/services/datas.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Converte as representações de data que o backend devolve em um instante
/// de calendário. Tentativas, em ordem: ISO/RFC 3339, "YYYY-MM-DD HH:MM:SS"
/// (espaço vira "T") e "dd/mm/yyyy" com hora opcional descartada.
/// Qualquer outra coisa vira `None`; a função nunca entra em pânico.
pub fn normalizar_data(texto: &str) -> Option<NaiveDateTime> {
    let texto = texto.trim();
    if texto.is_empty() {
        return None;
    }

    if let Some(data) = parse_iso(texto) {
        return Some(data);
    }

    // "2024-03-15 10:30:00" só passa no parser estrito com o "T" no meio
    if let Some(data) = parse_iso(&texto.replacen(' ', "T", 1)) {
        return Some(data);
    }

    if texto.contains('/') {
        return parse_dia_mes_ano(texto);
    }

    None
}

fn parse_iso(texto: &str) -> Option<NaiveDateTime> {
    if let Ok(data) = DateTime::parse_from_rfc3339(texto) {
        return Some(data.naive_local());
    }
    if let Ok(data) = NaiveDateTime::parse_from_str(texto, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(data);
    }
    if let Ok(data) = NaiveDate::parse_from_str(texto, "%Y-%m-%d") {
        return data.and_hms_opt(0, 0, 0);
    }
    None
}

// "15/03/2024" ou "15/03/2024 10:30:00"; exige exatamente dia/mês/ano.
// Datas de calendário impossíveis (31/02/...) viram `None`.
fn parse_dia_mes_ano(texto: &str) -> Option<NaiveDateTime> {
    let parte_data = texto.split_whitespace().next()?;

    let partes: Vec<&str> = parte_data.split('/').collect();
    if partes.len() != 3 {
        return None;
    }

    let dia: u32 = partes[0].parse().ok()?;
    let mes: u32 = partes[1].parse().ok()?;
    let ano: i32 = partes[2].parse().ok()?;

    NaiveDate::from_ymd_opt(ano, mes, dia)?.and_hms_opt(0, 0, 0)
}
