//! Servicio de línea de tiempo
//!
//! Ordena y particiona los horarios observados por hora del día. La idea es
//! "¿a qué hora suele salir este bus?", no "¿cuándo lo registré?": la fecha
//! del registro se descarta y solo cuenta la hora local del día. El resultado
//! es una lista `pasado` + `próximo` con el índice donde la vista debe
//! enfocarse por defecto.
//!
//! Todo el módulo es computación pura sobre un snapshot en memoria: el
//! instante de referencia "ahora" lo aporta el caller, no se lee aquí.

use chrono::{DateTime, TimeZone, Timelike};
use serde::Serialize;

use crate::models::schedule::Schedule;

/// Milisegundos en un día completo
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Offset de hora del día en milisegundos desde la medianoche local,
/// en el rango `[0, 86_400_000)`. La fecha y la precisión sub-segundo
/// se descartan. Total: no tiene camino de error; un timestamp fuera del
/// rango representable por chrono se normaliza a medianoche.
pub fn time_of_day_ms<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> i64 {
    let Some(instant) = DateTime::from_timestamp_millis(timestamp_ms) else {
        return 0;
    };
    let local = instant.with_timezone(tz);

    i64::from(local.hour()) * 3_600_000
        + i64::from(local.minute()) * 60_000
        + i64::from(local.second()) * 1_000
}

/// Restringe los candidatos a una sola etiqueta de ruta (igualdad exacta,
/// sensible a mayúsculas). Sin selector devuelve la entrada sin tocar.
/// Se aplica siempre antes de particionar.
pub fn filter_by_route(schedules: Vec<Schedule>, selector: Option<&str>) -> Vec<Schedule> {
    match selector {
        Some(route) => schedules.into_iter().filter(|s| s.route == route).collect(),
        None => schedules,
    }
}

/// Vista ordenada en dos particiones: `past` se renderiza atenuado,
/// `upcoming` a énfasis completo, con un divisor entre ambas cuando las dos
/// tienen elementos. `focus_index` es la posición del primer horario próximo
/// en la lista concatenada; `None` cuando no hay próximos.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub past: Vec<Schedule>,
    pub upcoming: Vec<Schedule>,
    pub focus_index: Option<usize>,
}

/// Ordena los candidatos por hora del día (orden estable: empates conservan
/// el orden relativo original) y los parte en pasado/próximo respecto al
/// offset de `now_ms`, evaluado una sola vez por invocación.
pub fn build_timeline<Tz: TimeZone>(mut schedules: Vec<Schedule>, now_ms: i64, tz: &Tz) -> Timeline {
    let now_offset = time_of_day_ms(now_ms, tz);

    schedules.sort_by_key(|s| time_of_day_ms(s.timestamp, tz));

    let split = schedules.partition_point(|s| time_of_day_ms(s.timestamp, tz) < now_offset);
    let upcoming = schedules.split_off(split);
    let past = schedules;

    let focus_index = if upcoming.is_empty() { None } else { Some(past.len()) };

    Timeline {
        past,
        upcoming,
        focus_index,
    }
}
