use anyhow::Result;
use image::{Rgb, RgbImage};
use std::fs::{self, File};
use tempfile::tempdir;
use triage_core::{
    Decision, Notice, Outcome, Session, SessionAction, TriageConfig, export_report, finalize,
};

#[test]
fn delete_first_image_then_quit() -> Result<()> {
    let dir = tempdir()?;
    RgbImage::from_pixel(64, 48, Rgb([1, 2, 3])).save(dir.path().join("a.png"))?;
    RgbImage::from_pixel(64, 48, Rgb([4, 5, 6])).save(dir.path().join("b.jpg"))?;
    File::create(dir.path().join("c.txt"))?;

    let config = TriageConfig::default();
    let mut session = Session::open(dir.path())?;
    let files: Vec<&str> = session.store().iter().collect();
    assert_eq!(files, vec!["a.png", "b.jpg"]);

    let renderer = config.renderer();
    let first = session.current_path().expect("non-empty session");
    assert_eq!(renderer.render(&first)?.dimensions(), (64, 48));

    assert_eq!(session.apply(SessionAction::Delete), Outcome::Redisplay);
    assert_eq!(session.current(), Some("b.jpg"));
    assert_eq!(session.apply(SessionAction::Quit), Outcome::Quit);

    let rejected = config.rejected_path(dir.path());
    let report = finalize(dir.path(), &rejected, session.review())?;
    assert_eq!(report.moved, vec!["a.png"]);

    assert!(!dir.path().join("a.png").exists());
    assert!(rejected.join("a.png").exists());
    assert!(dir.path().join("b.jpg").exists());
    assert!(dir.path().join("c.txt").exists());
    Ok(())
}

#[test]
fn review_walkthrough_with_boundaries() -> Result<()> {
    let dir = tempdir()?;
    for name in ["1.png", "2.png", "3.png"] {
        RgbImage::new(8, 8).save(dir.path().join(name))?;
    }
    let mut session = Session::open(dir.path())?;

    assert_eq!(session.apply(SessionAction::Previous), Outcome::Unchanged);
    assert_eq!(session.apply(SessionAction::Keep), Outcome::Redisplay);
    assert_eq!(session.apply(SessionAction::Delete), Outcome::Redisplay);
    assert_eq!(
        session.apply(SessionAction::Delete),
        Outcome::Notice(Notice::EndOfImages)
    );
    assert_eq!(session.apply(SessionAction::Previous), Outcome::Redisplay);
    // changing a decision on the way back
    assert_eq!(session.apply(SessionAction::Keep), Outcome::Redisplay);

    let review = session.review();
    assert_eq!(review.decision_of("1.png"), Decision::Keep);
    assert_eq!(review.decision_of("2.png"), Decision::Keep);
    assert_eq!(review.decision_of("3.png"), Decision::Delete);

    let rejected = dir.path().join("hapus");
    let report = finalize(dir.path(), &rejected, review)?;
    let out = dir.path().join("report.csv");
    export_report(session.store(), review, &report.moved, &out)?;

    let written = fs::read_to_string(&out)?;
    assert!(written.contains("3.png,Delete,true"));
    assert!(written.contains("1.png,Keep,false"));
    Ok(())
}

#[test]
fn unreadable_image_does_not_end_the_session() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.jpg"), b"garbage")?;
    RgbImage::new(8, 8).save(dir.path().join("b.png"))?;

    let mut session = Session::open(dir.path())?;
    let renderer = TriageConfig::default().renderer();
    let first = session.current_path().expect("non-empty session");
    assert!(renderer.render(&first).is_err());

    assert_eq!(session.apply(SessionAction::Next), Outcome::Redisplay);
    let second = session.current_path().expect("non-empty session");
    assert!(renderer.render(&second).is_ok());
    Ok(())
}
