//! Demo datasets backing every view. All values are mock display data for
//! one athlete; nothing here is computed or updated at runtime.

pub struct AthleteProfile {
    pub name: &'static str,
    pub initials: &'static str,
    pub ftp_watts: u16,
    pub watts_per_kg: f64,
    pub weight_kg: u16,
}

pub const ATHLETE: AthleteProfile = AthleteProfile {
    name: "Carlos Rodríguez",
    initials: "CR",
    ftp_watts: 285,
    watts_per_kg: 3.8,
    weight_kg: 75,
};

pub struct ReadinessSnapshot {
    pub readiness: u8,
    pub hrv_ms: u8,
    pub hrv_avg_7d: u8,
    pub sleep_score: u8,
    pub sleep_duration: &'static str,
    pub stress: u8,
    pub weekly_tss: u16,
}

pub const TODAY: ReadinessSnapshot = ReadinessSnapshot {
    readiness: 78,
    hrv_ms: 62,
    hrv_avg_7d: 58,
    sleep_score: 85,
    sleep_duration: "7h 45min",
    stress: 35,
    weekly_tss: 487,
};

pub const READINESS_NOTE: &str =
    "Tu recuperación es excelente. Hoy es un buen día para una sesión de alta intensidad.";

pub const AGENT_RECOMMENDATION: &str = "Basado en tu HRV elevado y buena calidad de sueño, hoy es ideal para hacer intervalos de umbral. He preparado una sesión de 2×20min @ FTP con recuperación completa.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Cycling,
    Gym,
}

impl WorkoutKind {
    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Cycling => "Ciclismo",
            WorkoutKind::Gym => "Gimnasio",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WorkoutKind::Cycling => "🚴",
            WorkoutKind::Gym => "🏋",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutStatus {
    Scheduled,
    Completed,
    Skipped,
}

pub struct Workout {
    pub kind: WorkoutKind,
    pub title: &'static str,
    pub duration_min: u16,
    pub tss: Option<u16>,
    pub description: &'static str,
    pub status: WorkoutStatus,
    pub date: &'static str,
    pub warmup: Option<&'static str>,
    pub main: &'static [&'static str],
    pub cooldown: Option<&'static str>,
    pub zones: Option<&'static str>,
}

pub static WEEKLY_WORKOUTS: &[Workout] = &[
    Workout {
        kind: WorkoutKind::Cycling,
        title: "Intervalos de Umbral",
        duration_min: 90,
        tss: Some(85),
        description: "2×20min @ FTP - Trabajo de umbral anaeróbico",
        status: WorkoutStatus::Scheduled,
        date: "Hoy - Lun 11 Nov",
        warmup: Some("15min @ Z2 (171-228W) con 3 sprints de 10s"),
        main: &[
            "20min @ 285W (FTP) - mantener cadencia 90-95rpm",
            "10min recuperación @ Z1 (<171W)",
            "20min @ 285W (FTP) - mantener cadencia 90-95rpm",
        ],
        cooldown: Some("10min @ Z1 rodaje suave"),
        zones: Some("Z4-Z5"),
    },
    Workout {
        kind: WorkoutKind::Gym,
        title: "Core + Estabilidad",
        duration_min: 30,
        tss: None,
        description: "Trabajo de core enfocado en ciclismo",
        status: WorkoutStatus::Scheduled,
        date: "Hoy - Lun 11 Nov",
        warmup: None,
        main: &[
            "Plancha frontal: 3×60s",
            "Plancha lateral: 3×45s cada lado",
            "Dead bug: 3×15 repeticiones",
            "Bird dog: 3×12 cada lado",
            "Pallof press: 3×15 cada lado",
            "Glute bridge: 3×20 repeticiones",
        ],
        cooldown: None,
        zones: None,
    },
    Workout {
        kind: WorkoutKind::Gym,
        title: "Fuerza Máxima - Tren Inferior",
        duration_min: 75,
        tss: None,
        description: "Bloque de fuerza - Semana 2/4",
        status: WorkoutStatus::Scheduled,
        date: "Mar 12 Nov",
        warmup: Some("Movilidad + activación glúteos 10min"),
        main: &[
            "Sentadilla back: 4×5 @ 85% 1RM (110kg)",
            "Peso muerto rumano: 3×8 @ 75% (90kg)",
            "Zancadas búlgaras: 3×10 cada pierna @ 20kg",
            "Extensión nórdica: 3×6 (asistida)",
            "Calf raises: 3×15 @ 40kg",
        ],
        cooldown: Some("Estiramientos 10min"),
        zones: None,
    },
    Workout {
        kind: WorkoutKind::Cycling,
        title: "Rodaje Z2 - Resistencia",
        duration_min: 90,
        tss: Some(55),
        description: "Volumen aeróbico - mantener Z2",
        status: WorkoutStatus::Scheduled,
        date: "Mié 13 Nov",
        warmup: Some("10min progresivo hasta Z2"),
        main: &[
            "70min @ Z2 (171-228W)",
            "Mantener cadencia 85-90rpm",
            "FC objetivo: 130-145 bpm",
        ],
        cooldown: Some("10min rodaje suave"),
        zones: Some("Z2"),
    },
    Workout {
        kind: WorkoutKind::Cycling,
        title: "Intervalos VO2max",
        duration_min: 75,
        tss: Some(92),
        description: "5×5min @ 120% FTP - Potencia aeróbica máxima",
        status: WorkoutStatus::Scheduled,
        date: "Jue 14 Nov",
        warmup: Some("15min @ Z2 progresivo"),
        main: &[
            "5 × 5min @ 342W (120% FTP)",
            "Recuperación: 5min @ Z1 entre series",
            "Cadencia objetivo: 95-100rpm",
            "FC máx esperada: ~180 bpm",
        ],
        cooldown: Some("10min @ Z1"),
        zones: Some("Z5-Z6"),
    },
    Workout {
        kind: WorkoutKind::Cycling,
        title: "Salida Larga - Fondo",
        duration_min: 180,
        tss: Some(180),
        description: "Volumen Z2-Z3 con trabajo de tempo",
        status: WorkoutStatus::Scheduled,
        date: "Sáb 16 Nov",
        warmup: Some("20min @ Z1-Z2 progresivo"),
        main: &[
            "60min @ Z2 (171-228W)",
            "40min @ Z3 Tempo (228-257W)",
            "40min @ Z2",
            "20min @ Z3 Tempo",
        ],
        cooldown: Some("20min @ Z1 rodaje muy suave"),
        zones: Some("Z2-Z3"),
    },
];

pub struct WeeklyStats {
    pub total_duration_min: u16,
    pub total_tss: u16,
    pub cycling_hours: f64,
    pub gym_hours: f64,
    pub completed_workouts: u8,
    pub scheduled_workouts: u8,
}

pub const WEEKLY_STATS: WeeklyStats = WeeklyStats {
    total_duration_min: 540,
    total_tss: 412,
    cycling_hours: 7.5,
    gym_hours: 1.75,
    completed_workouts: 0,
    scheduled_workouts: 6,
};

pub const TRAINING_WEEK_LABEL: &str = "Semana del 11-17 Nov • Bloque: Base 2";

pub struct MacroTargets {
    pub calories: u16,
    pub protein_g: u16,
    pub carbs_g: u16,
    pub fats_g: u16,
}

pub const DAILY_GOALS: MacroTargets = MacroTargets {
    calories: 2850,
    protein_g: 165,
    carbs_g: 380,
    fats_g: 75,
};

pub const CURRENT_INTAKE: MacroTargets = MacroTargets {
    calories: 1420,
    protein_g: 82,
    carbs_g: 185,
    fats_g: 38,
};

pub const WATER_INTAKE_L: f64 = 2.8;
pub const WATER_GOAL_L: f64 = 3.5;

pub struct Meal {
    pub time: &'static str,
    pub name: &'static str,
    pub calories: u16,
    pub protein_g: u16,
    pub carbs_g: u16,
    pub fats_g: u16,
    pub description: &'static str,
}

pub static MEALS: &[Meal] = &[
    Meal {
        time: "07:00",
        name: "Desayuno",
        calories: 750,
        protein_g: 35,
        carbs_g: 95,
        fats_g: 22,
        description: "Avena con plátano, mantequilla de cacahuete y 3 huevos revueltos",
    },
    Meal {
        time: "10:30",
        name: "Pre-Entreno",
        calories: 400,
        protein_g: 8,
        carbs_g: 80,
        fats_g: 5,
        description: "Tostadas con mermelada y plátano",
    },
    Meal {
        time: "13:00",
        name: "Durante Entreno",
        calories: 240,
        protein_g: 0,
        carbs_g: 60,
        fats_g: 0,
        description: "Bebida isotónica (60g carbohidratos/hora)",
    },
    Meal {
        time: "14:30",
        name: "Post-Entreno",
        calories: 500,
        protein_g: 30,
        carbs_g: 80,
        fats_g: 5,
        description: "Batido de recuperación",
    },
    Meal {
        time: "16:00",
        name: "Comida",
        calories: 700,
        protein_g: 55,
        carbs_g: 85,
        fats_g: 18,
        description: "Arroz con pollo y verduras",
    },
    Meal {
        time: "21:00",
        name: "Cena",
        calories: 260,
        protein_g: 37,
        carbs_g: 20,
        fats_g: 25,
        description: "Salmón con ensalada y patata dulce",
    },
];

pub const NUTRITION_NOTE: &str = "Hoy realizarás intervalos de umbral (TSS: 85). Asegúrate de consumir 60-80g de carbohidratos 2-3 horas antes. Durante el entreno, toma 60g/hora de carbohidratos simples. Post-entreno: ventana anabólica 30-45min con ratio 3:1 carbs:proteína.";

pub struct Supplement {
    pub name: &'static str,
    pub description: &'static str,
    pub dose: &'static str,
}

pub static SUPPLEMENTS: &[Supplement] = &[
    Supplement {
        name: "Creatina",
        description: "Mejora fuerza y recuperación",
        dose: "5g/día",
    },
    Supplement {
        name: "Cafeína",
        description: "Pre-entreno intenso",
        dose: "200mg",
    },
    Supplement {
        name: "Beta-Alanina",
        description: "Reduce fatiga muscular",
        dose: "3-4g/día",
    },
    Supplement {
        name: "Omega-3",
        description: "Antiinflamatorio, salud cardiovascular",
        dose: "2-3g/día",
    },
];

pub struct FtpPoint {
    pub date: &'static str,
    pub ftp: u16,
    pub watts_per_kg: f64,
}

pub static FTP_SERIES: &[FtpPoint] = &[
    FtpPoint { date: "15 Ago", ftp: 270, watts_per_kg: 3.6 },
    FtpPoint { date: "1 Sep", ftp: 273, watts_per_kg: 3.64 },
    FtpPoint { date: "15 Sep", ftp: 278, watts_per_kg: 3.7 },
    FtpPoint { date: "1 Oct", ftp: 280, watts_per_kg: 3.73 },
    FtpPoint { date: "15 Oct", ftp: 283, watts_per_kg: 3.77 },
    FtpPoint { date: "1 Nov", ftp: 285, watts_per_kg: 3.8 },
    FtpPoint { date: "11 Nov", ftp: 285, watts_per_kg: 3.8 },
];

pub struct HrvPoint {
    pub date: &'static str,
    pub hrv: u8,
    pub stress: u8,
}

pub static HRV_SERIES: &[HrvPoint] = &[
    HrvPoint { date: "Lun 4", hrv: 54, stress: 42 },
    HrvPoint { date: "Mar 5", hrv: 56, stress: 38 },
    HrvPoint { date: "Mié 6", hrv: 52, stress: 45 },
    HrvPoint { date: "Jue 7", hrv: 58, stress: 35 },
    HrvPoint { date: "Vie 8", hrv: 61, stress: 30 },
    HrvPoint { date: "Sáb 9", hrv: 59, stress: 33 },
    HrvPoint { date: "Dom 10", hrv: 60, stress: 32 },
    HrvPoint { date: "Lun 11", hrv: 62, stress: 35 },
];

pub struct LoadPoint {
    pub week: &'static str,
    pub tss: u16,
    pub acute: u16,
    pub chronic: u16,
}

pub static LOAD_SERIES: &[LoadPoint] = &[
    LoadPoint { week: "S1", tss: 420, acute: 380, chronic: 390 },
    LoadPoint { week: "S2", tss: 465, acute: 410, chronic: 405 },
    LoadPoint { week: "S3", tss: 490, acute: 455, chronic: 425 },
    LoadPoint { week: "S4", tss: 380, acute: 430, chronic: 435 },
];

pub struct SleepPoint {
    pub date: &'static str,
    pub total_h: f64,
    pub deep_h: f64,
    pub rem_h: f64,
}

pub static SLEEP_SERIES: &[SleepPoint] = &[
    SleepPoint { date: "Lun 4", total_h: 7.2, deep_h: 1.8, rem_h: 1.5 },
    SleepPoint { date: "Mar 5", total_h: 7.5, deep_h: 2.0, rem_h: 1.6 },
    SleepPoint { date: "Mié 6", total_h: 6.8, deep_h: 1.5, rem_h: 1.3 },
    SleepPoint { date: "Jue 7", total_h: 8.0, deep_h: 2.2, rem_h: 1.8 },
    SleepPoint { date: "Vie 8", total_h: 7.8, deep_h: 2.1, rem_h: 1.7 },
    SleepPoint { date: "Sáb 9", total_h: 7.3, deep_h: 1.9, rem_h: 1.5 },
    SleepPoint { date: "Dom 10", total_h: 7.7, deep_h: 2.0, rem_h: 1.6 },
];

pub static METRIC_INSIGHTS: &[&str] = &[
    "✅ Progresión FTP: +15W en 90 días (+5.5%). Proyección: 295-300W en 60 días si mantienes consistencia.",
    "✅ Recuperación: HRV en tendencia positiva. Tu cuerpo se está adaptando correctamente al entrenamiento.",
    "⚡ Carga óptima: Ratio agudo/crónico en 0.99 (zona verde). Bajo riesgo de sobreentreno o lesión.",
    "💡 Recomendación: Considera hacer un test FTP este domingo. Tus datos sugieren que has mejorado ~5W más.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_has_six_scheduled_workouts() {
        assert_eq!(WEEKLY_WORKOUTS.len(), WEEKLY_STATS.scheduled_workouts as usize);
        assert!(WEEKLY_WORKOUTS
            .iter()
            .all(|w| w.status == WorkoutStatus::Scheduled));
    }

    #[test]
    fn test_every_workout_has_a_main_set() {
        assert!(WEEKLY_WORKOUTS.iter().all(|w| !w.main.is_empty()));
    }

    #[test]
    fn test_meal_calories_sum_to_daily_goal() {
        let total: u16 = MEALS.iter().map(|m| m.calories).sum();
        assert_eq!(total, DAILY_GOALS.calories);
    }

    #[test]
    fn test_intake_stays_below_goals() {
        assert!(CURRENT_INTAKE.calories < DAILY_GOALS.calories);
        assert!(CURRENT_INTAKE.protein_g < DAILY_GOALS.protein_g);
        assert!(CURRENT_INTAKE.carbs_g < DAILY_GOALS.carbs_g);
        assert!(CURRENT_INTAKE.fats_g < DAILY_GOALS.fats_g);
    }

    #[test]
    fn test_metric_series_are_nonempty() {
        assert_eq!(FTP_SERIES.len(), 7);
        assert_eq!(HRV_SERIES.len(), 8);
        assert_eq!(LOAD_SERIES.len(), 4);
        assert_eq!(SLEEP_SERIES.len(), 7);
    }

    #[test]
    fn test_ftp_series_ends_at_current_ftp() {
        let last = FTP_SERIES.last().map(|p| p.ftp);
        assert_eq!(last, Some(ATHLETE.ftp_watts));
    }
}
