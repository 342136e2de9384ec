// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in sample table used when no input file is given.

/// Country name and value, sorted by descending value.
pub(crate) const COUNTRIES: &[(&str, f64)] = &[
    ("Qatar", 86.9),
    ("Ethiopia", 79.4),
    ("Cayman Islands", 77.8),
    ("Iceland", 77.0),
    ("Viet Nam", 76.0),
    ("Tanzania", 75.7),
    ("Thailand", 71.0),
    ("Norway", 68.7),
    ("China", 68.6),
    ("Paraguay", 66.8),
    ("Sweden", 65.7),
    ("Switzerland", 65.3),
    ("Malaysia", 65.0),
    ("Russian Federation", 64.8),
    ("New Zealand", 64.1),
    ("Indonesia", 62.7),
    ("Canada", 61.8),
    ("Australia", 61.3),
    ("Brazil", 61.2),
    ("Netherlands", 60.8),
    ("Finland", 60.1),
    ("El Salvador", 59.9),
    ("Israel", 59.7),
    ("Colombia", 59.6),
    ("Ecuador", 59.5),
    ("Korea", 59.5),
    ("Uruguay", 59.5),
    ("Philippines", 59.4),
    ("Hong Kong", 59.1),
    ("Trinidad Tobago", 59.1),
    ("Barbados", 58.9),
    ("United States", 58.6),
    ("Austria", 58.5),
    ("United Kingdom", 58.4),
    ("Guatemala", 58.3),
    ("Denmark", 58.0),
    ("Mexico", 57.5),
    ("Kyrgyzstan", 57.3),
    ("Germany", 57.1),
    ("Japan", 56.9),
    ("Chile", 56.0),
    ("Estonia", 56.0),
    ("Luxembourg", 55.9),
    ("Czech Republic", 55.2),
    ("Costa Rica", 54.7),
    ("Dominican Republic", 54.6),
    ("Cyprus", 53.3),
    ("Ireland", 52.4),
    ("Latvia", 52.4),
    ("Hungary", 51.6),
    ("Slovenia", 51.5),
    ("Lithuania", 51.2),
    ("Romania", 51.1),
    ("Saudi Arabia", 51.1),
    ("France", 50.9),
    ("Slovakia", 50.9),
    ("Poland", 50.2),
    ("Namibia", 50.0),
    ("Malta", 49.8),
    ("Portugal", 49.7),
    ("Lesotho", 49.2),
    ("Belgium", 49.0),
    ("Bulgaria", 46.9),
    ("Turkey", 45.9),
    ("Albania", 44.5),
    ("Spain", 44.4),
    ("Italy", 43.0),
    ("Croatia", 42.1),
    ("Egypt", 42.1),
    ("South Africa", 40.0),
    ("Macedonia", 39.7),
    ("Greece", 38.4),
    ("Serbia", 37.7),
    ("Palestine", 33.4),
];
