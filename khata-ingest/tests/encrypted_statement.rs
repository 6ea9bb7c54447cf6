//! Password handling on an encrypted statement (RC4-128, standard security
//! handler). The document decrypts with the user password `statement`.

use khata_ingest::{AnalyseOptions, DocumentText, PdfText, TextFragment, analyse_bytes};

const ENCRYPTED_PDF: &[u8] = include_bytes!("fixtures/encrypted.pdf");

#[test]
fn test_correct_password_decrypts_and_extracts() {
    let doc = PdfText::from_bytes(ENCRYPTED_PDF, Some("statement")).unwrap();
    assert_eq!(doc.page_count(), 1);

    let fragments = doc.page_fragments(0).unwrap();
    assert_eq!(
        fragments,
        vec![
            TextFragment::new("Secret", 100.0, 700.0),
            TextFragment::new("05/01/2024", 100.0, 680.0),
        ]
    );
}

#[test]
fn test_wrong_password_is_an_error() {
    assert!(PdfText::from_bytes(ENCRYPTED_PDF, Some("wrong")).is_err());
}

#[test]
fn test_missing_password_is_an_error() {
    assert!(PdfText::from_bytes(ENCRYPTED_PDF, None).is_err());
}

#[test]
fn test_wrong_password_fails_the_whole_analysis() {
    // Decryption failure is fatal before any page is parsed.
    let options = AnalyseOptions {
        password: Some("wrong".to_string()),
    };
    assert!(analyse_bytes(ENCRYPTED_PDF, &options).is_err());
}
