//! Static station and backdrop catalogs. Both are fixed at startup and never
//! mutated; every index in `[0, len)` is valid for the lifetime of the page.

/// A single internet radio stream entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Station {
    pub name: &'static str,
    pub stream_url: &'static str,
}

/// Ambient streams the dial can land on.
pub const STATIONS: &[Station] = &[
    Station {
        name: "Chillhop Essentials",
        stream_url: "https://streams.ilovemusic.de/iloveradio17.mp3",
    },
    Station {
        name: "Lofi Hip Hop Radio",
        stream_url: "https://stream.zeno.fm/0r0xa792kwzuv",
    },
    Station {
        name: "Box Lofi",
        stream_url: "https://stream.zeno.fm/f3wvbbqmdg8uv",
    },
    Station {
        name: "Antenne Chillout",
        stream_url: "https://s1-webradio.antenne.de/chillout/stream/mp3",
    },
    Station {
        name: "Ambient Sleeping Pill",
        stream_url: "https://radio.stereoscenic.com/asp-h",
    },
    Station {
        name: "Drone Zone",
        stream_url: "https://ice1.somafm.com/dronezone-128-mp3",
    },
];

/// Looping artwork swapped behind the page on every retune.
pub const BACKDROPS: &[&str] = &[
    "https://media.giphy.com/media/xUOwGdPiZiMgcwe1u8/giphy.gif",
    "https://media.giphy.com/media/26BRuo6sLetdllPAQ/giphy.gif",
    "https://media.giphy.com/media/l1J9FiGxR61OcF2mI/giphy.gif",
    "https://media.giphy.com/media/3o7aDczpCChShEG27S/giphy.gif",
    "https://media.giphy.com/media/5e25aUTZPcI9W78vUW/giphy.gif",
    "https://media.giphy.com/media/U3qYN8S0j3bpK/giphy.gif",
    "https://media.giphy.com/media/Basrh159dGwKY/giphy.gif",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn is_absolute(url: &str) -> bool {
        url.starts_with("https://") || url.starts_with("http://")
    }

    #[test]
    fn station_catalog_is_non_empty() {
        assert!(!STATIONS.is_empty());
    }

    #[test]
    fn backdrop_catalog_is_non_empty() {
        assert!(!BACKDROPS.is_empty());
    }

    #[test]
    fn stations_have_names_and_absolute_stream_urls() {
        for station in STATIONS {
            assert!(!station.name.trim().is_empty());
            assert!(
                is_absolute(station.stream_url),
                "not absolute: {}",
                station.stream_url
            );
        }
    }

    #[test]
    fn backdrops_are_absolute_urls() {
        for url in BACKDROPS {
            assert!(is_absolute(url), "not absolute: {url}");
        }
    }
}
