use std::io::Write;

use sales_dash::{DateFormatConfig, Error, FilterCriteria, QueryEngine, QueryKind, load_dataset};
use sales_dash::{DashboardConfig, QueryResponse};
use std::sync::Arc;

const SAMPLE_CSV: &str = "\
ORDERNUMBER,QUANTITYORDERED,PRICEEACH,ORDERLINENUMBER,SALES,ORDERDATE,STATUS,QTR_ID,MONTH_ID,YEAR_ID,PRODUCTLINE,MSRP,PRODUCTCODE,CUSTOMERNAME,PHONE,ADDRESSLINE1,ADDRESSLINE2,CITY,STATE,POSTALCODE,COUNTRY,TERRITORY,CONTACTLASTNAME,CONTACTFIRSTNAME,DEALSIZE
10107,30,95.7,2,2871,2/24/2003 0:00,Shipped,1,2,2003,Motorcycles,95,S10_1678,Land of Toys Inc.,2125557818,897 Long Airport Avenue,,NYC,NY,10022,USA,NA,Yu,Kwai,Small
10121,34,81.35,5,2765.9,5/7/2003 0:00,Shipped,2,5,2003,Motorcycles,95,S10_1678,Reims Collectables,26.47.1555,59 rue de l'Abbaye,,Reims,,51100,France,EMEA,Henriot,Paul,Small
10134,41,94.74,2,3884.34,7/1/2003 0:00,Shipped,3,7,2003,Motorcycles,95,S10_1678,Lyon Souveniers,+33 1 46 62 7555,27 rue du Colonel Pierre Avia,,Paris,,75508,France,EMEA,Da Cunha,Daniel,Medium
10145,45,83.26,6,3746.7,8/25/2003 0:00,Shipped,3,8,2003,Motorcycles,95,S10_1678,Toys4GrownUps.com,6265557265,78934 Hillside Dr.,,Pasadena,CA,90003,USA,NA,Young,Julie,Medium
10159,49,100,14,5205.27,10/10/2003 0:00,Shipped,4,10,2003,Motorcycles,95,S10_1678,Corporate Gift Ideas Co.,6505551386,7734 Strong St.,,San Francisco,CA,,USA,NA,Brown,Julie,Medium
10168,36,96.66,1,3479.76,10/28/2003 0:00,Shipped,4,10,2003,Motorcycles,95,S10_1678,Technics Stores Inc.,6505556809,9408 Furth Circle,,Burlingame,CA,94217,USA,NA,Hirano,Juri,Medium
10180,29,86.13,9,2497.77,11/11/2003 0:00,Shipped,4,11,2003,Motorcycles,95,S10_1678,Daedalus Designs Imports,20.16.1555,\"184, chausse de Tournai\",,Lille,,59000,France,EMEA,Rance,Martine,Small
10188,48,100,1,5512.32,11/18/2003 0:00,Shipped,4,11,2003,Motorcycles,95,S10_1678,Herkku Gifts,+47 2267 3215,\"Drammen 121, PR 744 Sentrum\",,Bergen,,N 5804,Norway,EMEA,Oeztan,Veysel,Medium
10201,22,98.57,2,2168.54,12/1/2003 0:00,Shipped,4,12,2003,Motorcycles,95,S10_1678,Mini Wheels Co.,6505555787,5557 North Pendale Street,,San Francisco,CA,,USA,NA,Murphy,Julie,Small
10211,41,100,14,4708.44,1/15/2004 0:00,Shipped,1,1,2004,Motorcycles,95,S10_1678,Auto Canal Petit,(1) 47.55.6555,25 rue Lauriston,,Paris,,75016,France,EMEA,Perrier,Dominique,Medium
";

fn write_csv(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

/// Test loading a file laid out like the production export
#[test]
fn test_load_sample_export() {
    let file = write_csv(SAMPLE_CSV.as_bytes());
    let dataset = load_dataset(file.path(), &DateFormatConfig::default()).unwrap();

    assert_eq!(dataset.count(), 10);
    assert_eq!(dataset.countries(), vec!["France", "Norway", "USA"]);
    assert_eq!(dataset.statuses(), vec!["Shipped"]);
    assert!(dataset.records().iter().all(|r| r.order_date.is_some()));
}

/// Test queries end to end on a loaded file
#[test]
fn test_queries_on_loaded_dataset() {
    let file = write_csv(SAMPLE_CSV.as_bytes());
    let dataset = load_dataset(file.path(), &DateFormatConfig::default()).unwrap();
    let engine = QueryEngine::new(Arc::new(dataset), DashboardConfig::default());

    let response = engine.execute(QueryKind::SalesByCountry, &FilterCriteria::new());
    let QueryResponse::Sales(series) = response else {
        panic!("expected a sales series");
    };
    assert_eq!(series.labels, vec!["France", "Norway", "USA"]);
    assert_eq!(series.values, vec![13856.45, 5512.32, 17471.27]);
}

/// Test that a non-numeric amount aborts the whole load
#[test]
fn test_corrupt_row_is_fatal() {
    let corrupt = SAMPLE_CSV.replace("2765.9", "n/a");
    let file = write_csv(corrupt.as_bytes());
    let err = load_dataset(file.path(), &DateFormatConfig::default()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("SALES"), "{message}");
    assert!(message.contains("line 3"), "{message}");
}

/// Test that a missing file is reported as an IO error
#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_dataset(&dir.path().join("absent.csv"), &DateFormatConfig::default())
        .unwrap_err();
    assert!(matches!(err, Error::Context { .. }));
}
