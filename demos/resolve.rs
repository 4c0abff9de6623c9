use streetaddr::{backfill_suffix, MatchReference, NameResolver, ReferenceColumns, StreetSplitter};

const STANDARD_CSV: &str = "\
Street Name,Street Suffix
Michigan,Avenue
Woodward,Avenue
Test,Drive
Stone,Trail
Harper,Court
Harper,Road
Twelve Mile,Road
";

fn main() {
    pretty_env_logger::init();

    let reference =
        match MatchReference::from_csv_reader(STANDARD_CSV.as_bytes(), &ReferenceColumns::default()) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("加载标准地址失败: {e}");
                return;
            }
        };
    let splitter = StreetSplitter::default();
    let resolver = NameResolver::new(&reference);

    println!("=== 标准街道匹配演示 ===\n");

    let cases = [
        "1000 Michigan Avenue",
        "1000 Michgan Ave",
        "56 Test Dr. unit 571",
        "32 East-Stone Trail.#9",
        "18 Harper",
        "25000 W 12 Mile Rd",
        "77 Woodwrd",
    ];

    for addr in cases {
        let parsed = splitter.parse(addr);
        let matched = resolver.close_match(&parsed.street_name, &parsed.street_suffix);
        let suffix = backfill_suffix(&parsed, Some(&matched), &reference.name_to_suffix);

        println!("输入: \"{}\"", addr);
        println!("  解析: {} | {}", parsed.street_name, parsed.street_suffix);
        println!(
            "  匹配: {} | {} (score {})",
            matched.name, matched.suffix, matched.score
        );
        println!("  补全后缀: {:?}", suffix);
        println!();
    }
}
