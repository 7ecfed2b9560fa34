use std::path::Path;
use xenowiki::data::tm::TmFile;
use xenowiki::{RecordFile, WikiError};

fn lines(raw: &str) -> Vec<String> {
    raw.lines().map(str::to_string).collect()
}

fn fixture_records() -> RecordFile {
    RecordFile::load(Path::new("tests/fixtures/gamedata/pokemon.txt")).expect("load pokemon.txt")
}

#[test]
fn extracts_record_between_markers() {
    let records = fixture_records();
    let record = records.extract("CHARMELEON").expect("record exists");

    assert_eq!(record.name(), "CHARMELEON");
    assert_eq!(record.get("Name"), Some("Charmeleon"));
    assert_eq!(record.get("InternalNumber"), Some("5"));
    assert_eq!(record.get("RegionalNumbers"), Some("5,0,0"));
    // The next record's header and Name line stay out.
    assert_eq!(record.get("Type2"), None);
    assert_ne!(record.get("Name"), Some("Charizard"));
}

#[test]
fn last_record_runs_to_end_of_file() {
    let records = fixture_records();
    let record = records.extract("HITMONTOP").expect("record exists");
    assert_eq!(record.get("Abilities"), Some("INTIMIDATE"));
    assert_eq!(record.get("RegionalNumbers"), Some("237,0,0"));
}

#[test]
fn first_record_start_saturates() {
    let records = RecordFile::from_lines(lines("InternalName=FIRST\nType1=NORMAL\n[2]\nName=Second\nInternalName=SECOND"));
    let record = records.extract("FIRST").expect("record exists");
    assert_eq!(record.get("Type1"), Some("NORMAL"));
    assert!(!record.contains("Name"));
}

#[test]
fn field_values_keep_later_equals_signs() {
    let records = RecordFile::from_lines(lines("[1]\nName=A\nInternalName=A\nFormName=x=y"));
    let record = records.extract("A").expect("record exists");
    assert_eq!(record.get("FormName"), Some("x=y"));
}

#[test]
fn missing_record_names_the_identifier() {
    let records = fixture_records();
    let err = records.extract("MISSINGNO").expect_err("should fail");
    assert!(matches!(err, WikiError::NotFound(ref name) if name == "MISSINGNO"));
    assert!(err.to_string().contains("MISSINGNO"));
}

#[test]
fn marker_match_is_exact() {
    let records = RecordFile::from_lines(lines("[1]\nName=Shyleon X\nInternalName=SHYLEONX\nType1=FAIRY"));
    assert!(records.extract("SHYLEON").is_err());
}

#[test]
fn types_are_display_cased() {
    let records = RecordFile::from_lines(lines(
        "[1]\nName=Singer\nInternalName=SINGER\nType1=SUONO\nType2=FAIRY\n[2]\nName=Plain\nInternalName=PLAIN\nType1=NORMAL\nType2=NORMAL",
    ));
    let singer = records.extract("SINGER").expect("record exists");
    assert_eq!(singer.types().unwrap(), vec!["Sound", "Fairy"]);
    assert!(singer.is_dual_type());

    let plain = records.extract("PLAIN").expect("record exists");
    assert_eq!(plain.types().unwrap(), vec!["Normal"]);
    assert!(!plain.is_dual_type());
}

#[test]
fn required_field_errors_name_the_field() {
    let records = fixture_records();
    let record = records.extract("TYROGUE").expect("record exists");
    let err = record.require("Height").expect_err("no height");
    assert!(matches!(err, WikiError::MissingField { ref field, .. } if field == "Height"));
}

#[test]
fn lists_internal_names_in_file_order() {
    let records = fixture_records();
    let names = records.internal_names();
    assert_eq!(names.first(), Some(&"CHARMANDER"));
    assert_eq!(names.len(), 8);
}

#[test]
fn teachables_match_whole_names() {
    let tm = TmFile::from_lines(
        lines("[MOONBLAST]\nSHYLEONX,TRISHOUT\n[DAZZLINGGLEAM]\nSHYLEON,SHYLEONX\n[HYPERVOICE]\nSHYLEON"),
        4,
    );
    let shyleon = tm.teachables("SHYLEON");
    assert_eq!(shyleon.tm, vec!["DAZZLINGGLEAM"]);
    assert_eq!(shyleon.tutor, vec!["HYPERVOICE"]);

    let shyleon_x = tm.teachables("SHYLEONX");
    assert_eq!(shyleon_x.tm, vec!["MOONBLAST", "DAZZLINGGLEAM"]);
    assert!(shyleon_x.tutor.is_empty());
}

#[test]
fn teachables_from_fixture() {
    let tm = TmFile::load(Path::new("tests/fixtures/gamedata/tm.txt"), 4).expect("load tm.txt");
    let charmeleon = tm.teachables("CHARMELEON");
    assert_eq!(charmeleon.tm, vec!["FLAMETHROWER"]);
    assert_eq!(charmeleon.tutor, vec!["FIREPUNCH"]);
}
