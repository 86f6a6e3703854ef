//! Subcommand bodies. Each prints plain text to stdout.

use anka_base::{
    AgeSpan, ContentRecord, ContentStore, KarmicLessons, MemoryContentStore, NumerologyProfile,
    PersonName, ReductionMode, Topic, age_on, compatibility, date_lessons, karmic_debts,
    life_path, lookup_number, name_lessons, personal_cycles,
};
use anka_math::{BirthDate, NaiveDate, SpecialPolicy, reduce_matrix, reduction_chain};
use anka_matrix::MatrixDestiny;
use anka_tree::{ALL_PILLARS, TreeOfLife};
use anyhow::Result;

use crate::config::{AnkaConfig, parse_relationship};

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

fn format_span(span: &AgeSpan) -> String {
    match span.end_age {
        Some(end) => format!("{:>2}  (ages {}-{})", span.value, span.start_age, end),
        None => format!("{:>2}  (ages {}+)", span.value, span.start_age),
    }
}

fn format_record(record: Option<&ContentRecord>) -> String {
    match record {
        Some(r) => format!("  {}", r.title),
        None => String::new(),
    }
}

fn format_digits(digits: &[u32]) -> String {
    if digits.is_empty() {
        return "none".to_string();
    }
    digits
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_lessons<S: ContentStore + ?Sized>(label: &str, lessons: &KarmicLessons, store: &S) {
    println!("{label}");
    println!("  present: {}", format_digits(&lessons.present.to_vec()));
    println!("  missing: {}", format_digits(&lessons.missing.to_vec()));
    for (digit, record) in lessons.with_records(store) {
        if let Some(r) = record {
            println!("    {digit}: {}", r.title);
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

pub fn reduce(n: u32, matrix: bool, preserve: bool) {
    if matrix {
        println!("{n} -> {}", reduce_matrix(n));
        return;
    }
    let policy = if preserve {
        SpecialPolicy::Preserve
    } else {
        SpecialPolicy::Collapse
    };
    println!("{}", reduction_chain(n, policy));
}

pub fn life_path_report(date: &BirthDate, store: &MemoryContentStore) {
    let raw = life_path(date, ReductionMode::Raw);
    let chain = reduction_chain(raw, SpecialPolicy::Preserve);
    let value = life_path(date, ReductionMode::Reduced);
    println!("Life Path for {date}: {value}");
    println!("  digits: {}", format_digits(&date.digits()));
    println!("  chain:  {chain}");
    if let Some(r) = lookup_number(store, Topic::LifePath, value) {
        println!("  {}", r.title);
        if !r.text.is_empty() {
            println!("  {}", r.text);
        }
    }
}

pub fn profile(
    date: BirthDate,
    name: &str,
    today: NaiveDate,
    store: &MemoryContentStore,
) -> Result<()> {
    let name = PersonName::parse(name)?;
    let p = NumerologyProfile::compute(date, name, today)?;

    println!("{} ({})", p.name.original(), p.date);
    println!("Core numbers");
    for (attr, value, record) in p.interpret(store) {
        println!("  {:<12} {:>2}{}", attr.name(), value, format_record(record));
    }

    let c = p.challenges;
    println!(
        "Challenges: youth {}, maturity {}, wisdom {}, primary {}",
        c.youth, c.maturity, c.wisdom, c.primary
    );

    println!("Life cycles");
    for (label, span) in ["formative", "productive", "harvest"]
        .iter()
        .zip(p.life_cycles.as_array())
    {
        println!("  {label:<10} {}", format_span(&span));
    }

    println!("Realization periods");
    for (i, span) in p.realization_periods.as_array().iter().enumerate() {
        println!("  {:<10} {}", i + 1, format_span(span));
    }

    let age = age_on(&p.date, today);
    println!(
        "Personal cycles on {} (age {age}): year {}, month {}, day {}",
        p.personal.reference, p.personal.year, p.personal.month, p.personal.day
    );

    print_lessons("Karmic lessons (date)", &p.date_lessons, store);
    print_lessons("Karmic lessons (name)", &p.name_lessons, store);
    print_debts(&p.debts, store);
    Ok(())
}

fn print_debts<S: ContentStore + ?Sized>(debts: &[anka_base::DebtFinding], store: &S) {
    if debts.is_empty() {
        println!("Karmic debts: none");
        return;
    }
    println!("Karmic debts");
    for d in debts {
        println!(
            "  {:<12} raw {:>3}  {}{}",
            d.attribute.name(),
            d.raw,
            d.debt.name(),
            format_record(d.debt.record(store))
        );
    }
}

pub fn karmic(date: &BirthDate, name: &str, store: &MemoryContentStore) -> Result<()> {
    let name = PersonName::parse(name)?;
    print_lessons("Karmic lessons (date)", &date_lessons(date), store);
    print_lessons("Karmic lessons (name)", &name_lessons(&name), store);
    print_debts(&karmic_debts(date, &name)?, store);
    Ok(())
}

pub fn personal(date: &BirthDate, today: NaiveDate, store: &MemoryContentStore) {
    let p = personal_cycles(date, today);
    println!("Personal cycles for {date} on {}", p.reference);
    println!(
        "  year  {:>2}{}",
        p.year,
        format_record(lookup_number(store, Topic::PersonalYear, p.year))
    );
    println!("  month {:>2}", p.month);
    println!("  day   {:>2}", p.day);
}

pub fn compat(
    date_a: &BirthDate,
    date_b: &BirthDate,
    relationship: Option<&str>,
    config: &AnkaConfig,
    store: &MemoryContentStore,
) -> Result<()> {
    let relationship = match relationship {
        Some(name) => parse_relationship(name)?,
        None => config.relationship()?,
    };
    let a = life_path(date_a, ReductionMode::Reduced);
    let b = life_path(date_b, ReductionMode::Reduced);
    let result = compatibility(a, b, relationship, store);

    println!(
        "Life Paths {a} and {b} ({}), key {}",
        relationship.name(),
        result.key
    );
    println!("  score: {} (approximate keyword heuristic)", result.overall);
    match &result.title {
        Some(title) => println!("  {title}"),
        None => println!("  no descriptor; neutral default"),
    }
    if result.breakdown.matched {
        println!(
            "  positive: {}",
            format_words(&result.breakdown.positive_hits)
        );
        println!(
            "  negative: {}",
            format_words(&result.breakdown.negative_hits)
        );
    }
    for s in &result.strengths {
        println!("  + {s}");
    }
    for c in &result.challenges {
        println!("  - {c}");
    }
    Ok(())
}

fn format_words(words: &[&str]) -> String {
    if words.is_empty() {
        "none".to_string()
    } else {
        words.join(", ")
    }
}

pub fn matrix(date: &BirthDate, store: &MemoryContentStore) -> Result<()> {
    let m = MatrixDestiny::compute(date)?;
    let base = m.base();
    println!("Destiny matrix for {date}");
    println!(
        "  base: day {}, month {}, year {}, life mission {}",
        base.day, base.month, base.year, base.life_mission
    );
    let center = m.center();
    println!(
        "  center: {center}{}",
        format_record(lookup_number(store, Topic::Matrix, center.get()))
    );

    let (male, female) = (m.male_line(), m.female_line());
    println!("  male line:   {} / {} / {}", male.start, male.mission, male.end);
    println!("  female line: {} / {} / {}", female.start, female.mission, female.end);

    for (label, pair) in [
        ("father", m.father()),
        ("mother", m.mother()),
        ("talent", m.talent()),
        ("tail", m.tail()),
    ] {
        println!("  {label:<7} {} / {}", pair.primary, pair.secondary);
    }

    let h = m.heart();
    println!(
        "  heart: physique {}, energy {}, emotions {}",
        h.physique, h.energy, h.emotions
    );

    println!("  {:<13} {:>8} {:>9} {:>9}", "chakra", "physical", "energetic", "emotional");
    for c in m.chakras() {
        println!(
            "  {:<13} {:>8} {:>9} {:>9}",
            c.kind.name(),
            c.physical,
            c.energetic,
            c.emotional
        );
    }
    let t = m.chakra_totals();
    println!("  {:<13} {:>8} {:>9} {:>9}", "total", t.physical, t.energetic, t.emotional);

    let fmt_lineage = |l: anka_matrix::Lineage| {
        l.0.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(" -> ")
    };
    println!("  paternal: {}", fmt_lineage(m.paternal()));
    println!("  maternal: {}", fmt_lineage(m.maternal()));

    let d = m.domains();
    println!(
        "  domains: sky {}, earth {}, personal {}, spiritual {}",
        d.sky, d.earth, d.personal, d.spiritual
    );
    let e = m.external();
    println!("  external: {} / {}", e.primary, e.secondary);
    Ok(())
}

pub fn tree(
    date: &BirthDate,
    top: Option<usize>,
    config: &AnkaConfig,
    store: &MemoryContentStore,
) {
    let t = TreeOfLife::compute(date);
    let top = top.unwrap_or(config.tree.significant_edges);

    println!("Tree for {date}");
    for (s, value) in t.nodes().iter() {
        println!(
            "  {:>2} {:<10} {:<14} {:>2}{}",
            s.number(),
            s.name(),
            s.meaning(),
            value,
            format_record(store.get(Topic::Sephirah, s.name()))
        );
    }

    println!("Significant paths");
    for p in t.significant_paths(top) {
        println!(
            "  {} {:<7} {} - {}  {}{}",
            p.number(),
            p.letter(),
            p.def.from,
            p.def.to,
            p.value,
            format_record(store.get(Topic::Path, &p.number().to_string()))
        );
    }

    let b = t.pillar_balance();
    println!("Pillars");
    for pillar in ALL_PILLARS {
        println!("  {:<12} {}", pillar.name(), b.get(pillar));
    }
    println!("  dominant: {}", b.dominant);
}
