use anyhow::Result;
use seller_stats::core::ReportStore;
use seller_stats::{LocalStorage, SellerBook, Session, StatsError, Tier};
use std::io::Cursor;
use tempfile::TempDir;

fn input(lines: &[&str]) -> Cursor<Vec<u8>> {
    let mut text = lines.join("\n");
    text.push('\n');
    Cursor::new(text.into_bytes())
}

#[tokio::test]
async fn test_end_to_end_report_file_matches_render() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("result.txt");

    let lines = [
        "3", "Alice", "111", "North", "120", "Bob", "222", "South", "40", "Cleo", "333", "East",
        "210", "q",
    ];
    let mut session = Session::new(input(&lines), Vec::new(), LocalStorage::new(&output_path));
    let summary = session.run().await?;
    assert_eq!(summary.iterations, 1);
    assert_eq!(summary.sellers_recorded, 3);

    let mut book = SellerBook::with_capacity(3);
    book.add("Alice", 111, "North", 120);
    book.add("Bob", 222, "South", 40);
    book.add("Cleo", 333, "East", 210);
    book.sort();
    let expected = book.render();

    let on_disk = std::fs::read_to_string(&output_path)?;
    assert_eq!(on_disk, expected);
    assert_eq!(session.store().read_report().await?, expected);

    let terminal = String::from_utf8(session.into_output())?;
    assert!(terminal.contains(&expected));
    Ok(())
}

#[tokio::test]
async fn test_each_iteration_overwrites_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("result.txt");

    let lines = [
        "2", "Dan", "4", "West", "250", "Eve", "5", "North", "260", "again", "1", "Finn", "6",
        "South", "10", "q",
    ];
    let mut session = Session::new(input(&lines), Vec::new(), LocalStorage::new(&output_path));
    let summary = session.run().await?;
    assert_eq!(summary.iterations, 2);
    assert_eq!(summary.sellers_recorded, 3);

    let on_disk = std::fs::read_to_string(&output_path)?;
    assert!(on_disk.starts_with("-- Level 0 --\nName: \t\tFinn\n"));
    assert!(!on_disk.contains("Dan"));
    assert!(!on_disk.contains("Level 3"));
    Ok(())
}

#[tokio::test]
async fn test_unwritable_output_aborts_session() -> Result<()> {
    let temp_dir = TempDir::new()?;
    // The output path is an existing directory, so the write fails.
    let storage = LocalStorage::new(temp_dir.path());

    let lines = ["1", "Ann", "1", "East", "60", "q"];
    let mut session = Session::new(input(&lines), Vec::new(), storage);
    let err = session.run().await.unwrap_err();

    assert!(matches!(err, StatsError::ReportWrite { .. }));
    assert!(!err.is_input_error());
    Ok(())
}

#[test]
fn test_sorted_book_groups_by_tier() {
    let mut book = SellerBook::with_capacity(5);
    for (i, units) in [10, 500, 75, 150, 60].into_iter().enumerate() {
        book.add(format!("Seller {}", i), i as i64, "Central", units);
    }
    book.sort();

    let sold: Vec<i64> = book.sellers().iter().map(|s| s.units_sold()).collect();
    assert!(sold.windows(2).all(|w| w[0] >= w[1]));

    let report = book.render();
    for tier in Tier::ALL {
        let count = book.tier_count(tier);
        let header = format!("-- Level {} --", tier);
        let start = report.find(&header).expect("tier present");
        let section_end = report[start..]
            .find("sellers have reached")
            .map(|i| start + i)
            .expect("summary line present");
        let rendered = report[start..section_end].matches("Name: ").count();
        assert_eq!(rendered, count);
        assert!(report.contains(&format!("{} sellers have reached level {}.", count, tier)));
    }
}
