use csv::ReaderBuilder;
use serde::Deserialize;
use std::{error::Error, fs::File, io::Read, path::Path};

use super::geo::distance::Coord;
use super::geo::rank::Located;

/// One row of the doctor directory CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub district: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: String,
    pub address: String,
}

impl Located for Doctor {
    fn coord(&self) -> Coord {
        (self.latitude, self.longitude)
    }
}

/// The static directory of doctors, loaded once from a CSV file.
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    /// Loads the directory from a 6-column CSV file with a header row
    /// (name, district, latitude, longitude, phone, address).
    pub fn new<P: AsRef<Path>>(csv_path: P) -> Result<Self, Box<dyn Error>> {
        let file = File::open(csv_path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Box<dyn Error>> {
        let mut rdr = ReaderBuilder::new().delimiter(b',').from_reader(reader);

        let mut doctors = Vec::new();
        for result in rdr.deserialize() {
            let doctor: Doctor = result?;
            doctors.push(doctor);
        }

        Ok(DoctorDirectory { doctors })
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}

/// A hospital with a fixed, known location.
#[derive(Debug, Clone)]
pub struct Hospital {
    pub name: &'static str,
    pub address: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f64,
}

impl Located for Hospital {
    fn coord(&self) -> Coord {
        (self.latitude, self.longitude)
    }
}

/// The hospital every SOS alert points at: CMC Vellore.
pub fn emergency_hospital() -> Hospital {
    Hospital {
        name: "Christian Medical College Vellore (CMC Vellore)",
        address: "IDA Scudder Road, Vellore, Tamil Nadu 632004, India",
        latitude: 12.9294,
        longitude: 79.1325,
        rating: 4.8,
    }
}
