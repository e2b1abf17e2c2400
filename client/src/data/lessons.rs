//! Static Education Hub lessons.

use crate::state::education::Track;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub id: &'static str,
    pub track: Track,
    pub title: &'static str,
    pub summary: &'static str,
    pub minutes: u16,
}

pub const LESSONS: &[Lesson] = &[
    Lesson {
        id: "basics-temperature",
        track: Track::Basics,
        title: "Why ocean temperature matters",
        summary: "How heat is stored in the upper ocean and why a fraction of a degree shifts weather patterns.",
        minutes: 8,
    },
    Lesson {
        id: "basics-salinity",
        track: Track::Basics,
        title: "Salinity and density",
        summary: "Salt content, density layering, and how freshwater from rivers and rain forms surface lenses.",
        minutes: 10,
    },
    Lesson {
        id: "basics-currents",
        track: Track::Basics,
        title: "Currents and monsoon circulation",
        summary: "The seasonal reversal of Indian Ocean currents and what drives it.",
        minutes: 12,
    },
    Lesson {
        id: "floats-cycle",
        track: Track::Floats,
        title: "The ten-day profiling cycle",
        summary: "Descend to parking depth, drift, dive to 2000 m, rise while sampling, transmit, repeat.",
        minutes: 7,
    },
    Lesson {
        id: "floats-sensors",
        track: Track::Floats,
        title: "Core, BGC, and Deep floats",
        summary: "What each float family measures: CTD only, added biogeochemical sensors, or full-depth profiles.",
        minutes: 9,
    },
    Lesson {
        id: "climate-heatwaves",
        track: Track::Climate,
        title: "Marine heatwaves",
        summary: "Detecting prolonged warm anomalies from float profiles and their effect on fisheries.",
        minutes: 11,
    },
    Lesson {
        id: "climate-sea-level",
        track: Track::Climate,
        title: "Thermal expansion and sea level",
        summary: "How warming water expands and what float records say about regional sea-level rise.",
        minutes: 10,
    },
];
