use streetaddr::StreetSplitter;

fn main() {
    pretty_env_logger::init();

    let splitter = StreetSplitter::default();

    println!("=== 街道地址拆分演示 ===\n");

    let test_cases = vec![
        // 常规地址
        "1000 Michigan Avenue",
        "1000 Michigan Avenue Road",
        // 单元号
        "56 Test Dr. unit 571",
        "400 N Woodward Ave Ste 200",
        // 方位前缀与标点
        "32 East-Stone Trail.#9",
        "12 n Main St",
        // Mile Road
        "25000 W 12 Mile Rd",
        "8 Mile Road",
        // 没有门牌号
        "Best of America 1000 Dr cat 506",
        // 只有后缀词
        "11 Street",
        // 无法识别
        "",
    ];

    for addr in test_cases {
        let result = splitter.parse(addr);
        println!("输入: \"{}\"", addr);
        println!("  门牌: {:?}", result.street_number);
        println!("  前缀: {:?}", result.street_prefix);
        println!("  名称: {:?}", result.street_name);
        println!("  后缀: {:?}", result.street_suffix);
        println!("  其他: {:?}", result.other);
        println!("  重组: {}", result.street_address());
        println!();
    }
}
