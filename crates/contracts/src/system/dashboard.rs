use serde::{Deserialize, Serialize};

/// Summary numbers for the dashboard cards (`GET /dashboard/{rol}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardMetrics {
    #[serde(default)]
    pub pacientes: Option<u64>,
    #[serde(default)]
    pub medicamentos: Option<u64>,
    #[serde(default)]
    pub ordenes: Option<u64>,
    #[serde(default, alias = "alertas_inventario")]
    pub alertas: Option<u64>,
}

/// URL segment for a role label: lowercase ASCII, accents stripped, spaces as `-`.
/// "Químico Farmacéutico" -> "quimico-farmaceutico". Blank roles map to "general".
pub fn role_slug(role: &str) -> String {
    let slug = role
        .trim()
        .chars()
        .map(|c| match c {
            'á' | 'Á' => 'a',
            'é' | 'É' => 'e',
            'í' | 'Í' => 'i',
            'ó' | 'Ó' => 'o',
            'ú' | 'Ú' | 'ü' | 'Ü' => 'u',
            'ñ' | 'Ñ' => 'n',
            c if c.is_ascii_alphanumeric() => c.to_ascii_lowercase(),
            _ => '-',
        })
        .collect::<String>();
    let parts: Vec<&str> = slug.split('-').filter(|p| !p.is_empty()).collect();
    if parts.is_empty() {
        "general".to_string()
    } else {
        parts.join("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs() {
        assert_eq!(role_slug("Administrador"), "administrador");
        assert_eq!(role_slug(" Químico  Farmacéutico "), "quimico-farmaceutico");
        assert_eq!(role_slug(""), "general");
    }

    #[test]
    fn partial_metrics() {
        let m: DashboardMetrics = serde_json::from_str(r#"{"pacientes": 128, "alertas_inventario": 5}"#).unwrap();
        assert_eq!(m.pacientes, Some(128));
        assert_eq!(m.alertas, Some(5));
        assert_eq!(m.ordenes, None);
    }
}
