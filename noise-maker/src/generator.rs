use chrono::{DateTime, FixedOffset};
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 7] = [
    ("GET", 60),
    ("POST", 15),
    ("PUT", 5),
    ("DELETE", 5),
    ("HEAD", 5),
    ("OPTIONS", 2),
    ("PATCH", 3),
];
const PATHS: [(&str, u8); 9] = [
    ("/", 10),
    ("/intranet-analytics/", 30),
    ("/docs/manage-users/", 15),
    ("/docs/manage-websites/", 15),
    ("/faq/", 10),
    ("/asset.css", 20),
    ("/asset.js", 20),
    ("/this/page/does/not/exist/", 5),
    ("http://example.net/faq/", 5),
];
const STATUS: [(u16, u8); 7] = [
    (200, 60),
    (304, 5),
    (301, 5),
    (307, 3),
    (404, 15),
    (500, 3),
    (503, 2),
];
const REFERRERS: [(&str, u8); 3] = [
    ("-", 10),
    ("http://example.net/", 3),
    ("http://example.net/docs/", 1),
];
const AGENTS: [(&str, u8); 3] = [
    (
        "Mozilla/5.0 (X11; U; Linux x86_64; fr-FR) AppleWebKit/534.7 (KHTML, like Gecko) Epiphany/2.30.6 Safari/534.7",
        5,
    ),
    (
        "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/536.6 (KHTML, like Gecko) Chrome/20.0.1092.0 Safari/536.6",
        5,
    ),
    ("curl/7.58.0", 1),
];
const MALFORMED: [(&str, u8); 4] = [
    ("this is not a valid log", 1),
    (
        "10.0.0.1 - - [09/Jul/2018:10:11:30 +0200] \"TRACE / HTTP/1.1\" 200 12",
        1,
    ),
    ("10.0.0.1 - - [09/Jul/2018:10:11:30] \"GET / HTTP/1.1\" 200 12", 1),
    ("10.0.0.1 - - [09/Jul/2018:10:11:30 +0200] \"GET / HTTP/1.1\" 200 -", 1),
];

const TS_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, table: &[(T, u8)]) -> T {
    table
        .choose_weighted(rng, |(_, w)| *w)
        .map_or(table[0].0, |(value, _)| *value)
}

pub fn generate_common_log<R: Rng + ?Sized>(rng: &mut R, at: &DateTime<FixedOffset>) -> String {
    let ip = format!(
        "192.168.{}.{}",
        rng.random_range(0..4),
        rng.random_range(0..64)
    );
    let identity = if rng.random_bool(0.1) { "admin" } else { "-" };
    let timestamp = at.format(TS_FORMAT);
    let method = pick(rng, &METHODS);
    let path = pick(rng, &PATHS);
    let status = pick(rng, &STATUS);
    let size = rng.random_range(100..5000);

    format!("{ip} - {identity} [{timestamp}] \"{method} {path} HTTP/1.1\" {status} {size}")
}

pub fn generate_combined_log<R: Rng + ?Sized>(rng: &mut R, at: &DateTime<FixedOffset>) -> String {
    let common = generate_common_log(rng, at);
    let referrer = pick(rng, &REFERRERS);
    let agent = pick(rng, &AGENTS);

    format!("{common} \"{referrer}\" \"{agent}\"")
}

pub fn generate_malformed_line<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, &MALFORMED).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use log_analyzer::parse_line;
    use rand::{SeedableRng, rngs::StdRng};

    fn at() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2018, 7, 10, 22, 21, 28)
            .unwrap()
    }

    #[test]
    fn common_lines_parse_with_given_timestamp() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let line = generate_common_log(&mut rng, &at());
            let entry = parse_line(&line).expect("generated line parses");
            assert_eq!(entry.timestamp, "10/Jul/2018:22:21:28 +0200");
            assert!(entry.ip.starts_with("192.168."));
        }
    }

    #[test]
    fn combined_lines_parse() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let line = generate_combined_log(&mut rng, &at());
            assert!(line.ends_with('"'));
            assert!(parse_line(&line).is_some(), "{line}");
        }
    }

    #[test]
    fn malformed_lines_never_parse() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert!(parse_line(&generate_malformed_line(&mut rng)).is_none());
        }
    }
}
