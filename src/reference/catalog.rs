//! Crop and region catalogue.
//!
//! Read-only lists of the crops and Indian states / union territories
//! offered to farmers. Used for display names and selection lists only;
//! requirement lookup never depends on a key being present here.

use serde::Serialize;

/// A selectable crop.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Crop {
    pub id: u32,
    pub name: &'static str,
}

/// A state or union territory with its districts.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct State {
    pub id: u32,
    pub name: &'static str,
    pub districts: &'static [&'static str],
}

impl State {
    pub fn has_district(&self, district: &str) -> bool {
        self.districts.iter().any(|d| d.eq_ignore_ascii_case(district.trim()))
    }
}

/// Look up a crop by id.
pub fn crop(id: u32) -> Option<&'static Crop> {
    CROPS.iter().find(|c| c.id == id)
}

/// Look up a state by id.
pub fn state(id: u32) -> Option<&'static State> {
    STATES.iter().find(|s| s.id == id)
}

pub const CROPS: &[Crop] = &[
    Crop { id: 1, name: "Wheat" },
    Crop { id: 2, name: "Rice" },
    Crop { id: 3, name: "Maize" },
    Crop { id: 4, name: "Cotton" },
    Crop { id: 5, name: "Sugarcane" },
    Crop { id: 6, name: "Soybean" },
    Crop { id: 7, name: "Groundnut" },
    Crop { id: 8, name: "Potato" },
    Crop { id: 9, name: "Tomato" },
    Crop { id: 10, name: "Onion" },
    Crop { id: 11, name: "Bajra (Pearl Millet)" },
    Crop { id: 12, name: "Barley" },
    Crop { id: 13, name: "Mustard" },
    Crop { id: 14, name: "Chickpea (Gram)" },
    Crop { id: 15, name: "Lentil (Masoor)" },
    Crop { id: 16, name: "Pea" },
    Crop { id: 17, name: "Sugar beet" },
    Crop { id: 18, name: "Sunflower" },
    Crop { id: 19, name: "Jute" },
    Crop { id: 20, name: "Sesame (Til)" },
    Crop { id: 21, name: "Sorghum (Jowar)" },
    Crop { id: 22, name: "Pigeon Pea (Arhar/Tur)" },
    Crop { id: 23, name: "Black Gram (Urad)" },
    Crop { id: 24, name: "Green Gram (Moong)" },
    Crop { id: 25, name: "Cabbage" },
    Crop { id: 26, name: "Cauliflower" },
    Crop { id: 27, name: "Brinjal (Eggplant)" },
    Crop { id: 28, name: "Okra (Lady Finger)" },
    Crop { id: 29, name: "Carrot" },
    Crop { id: 30, name: "Spinach" },
    Crop { id: 31, name: "Pumpkin" },
    Crop { id: 32, name: "Chili Pepper" },
    Crop { id: 33, name: "Garlic" },
    Crop { id: 34, name: "Ginger" },
    Crop { id: 35, name: "Turmeric" },
    Crop { id: 36, name: "Sweet Potato" },
    Crop { id: 37, name: "Radish" },
    Crop { id: 38, name: "Turnip" },
    Crop { id: 39, name: "Cucumber" },
    Crop { id: 40, name: "Bottle Gourd" },
];

pub const STATES: &[State] = &[
    State {
        id: 1,
        name: "Andhra Pradesh",
        districts: &[
            "Anantapur",
            "Chittoor",
            "East Godavari",
            "Guntur",
            "Krishna",
            "Kurnool",
            "Prakasam",
            "Srikakulam",
            "Sri Potti Sriramulu Nellore",
            "Visakhapatnam",
            "Vizianagaram",
            "West Godavari",
            "YSR Kadapa",
        ],
    },
    State {
        id: 2,
        name: "Arunachal Pradesh",
        districts: &[
            "Tawang",
            "West Kameng",
            "East Kameng",
            "Papum Pare",
            "Kurung Kumey",
            "Kra Daadi",
            "Lower Subansiri",
            "Upper Subansiri",
            "West Siang",
            "East Siang",
            "Siang",
            "Upper Siang",
            "Lower Siang",
            "Lower Dibang Valley",
            "Dibang Valley",
            "Anjaw",
            "Lohit",
            "Namsai",
            "Changlang",
            "Tirap",
            "Longding",
        ],
    },
    State {
        id: 3,
        name: "Assam",
        districts: &[
            "Baksa",
            "Barpeta",
            "Biswanath",
            "Bongaigaon",
            "Cachar",
            "Charaideo",
            "Chirang",
            "Darrang",
            "Dhemaji",
            "Dhubri",
            "Dibrugarh",
            "Goalpara",
            "Golaghat",
            "Hailakandi",
            "Hojai",
            "Jorhat",
            "Kamrup",
            "Kamrup Metropolitan",
            "Karbi Anglong",
            "Karimganj",
            "Kokrajhar",
            "Lakhimpur",
            "Majuli",
            "Morigaon",
            "Nagaon",
            "Nalbari",
            "Dima Hasao",
            "Sivasagar",
            "Sonitpur",
            "South Salmara-Mankachar",
            "Tinsukia",
            "Udalguri",
            "West Karbi Anglong",
        ],
    },
    State {
        id: 4,
        name: "Bihar",
        districts: &[
            "Araria",
            "Arwal",
            "Aurangabad",
            "Banka",
            "Begusarai",
            "Bhagalpur",
            "Bhojpur",
            "Buxar",
            "Darbhanga",
            "East Champaran (Motihari)",
            "Gaya",
            "Gopalganj",
            "Jamui",
            "Jehanabad",
            "Kaimur (Bhabua)",
            "Katihar",
            "Khagaria",
            "Kishanganj",
            "Lakhisarai",
            "Madhepura",
            "Madhubani",
            "Munger (Monghyr)",
            "Muzaffarpur",
            "Nalanda",
            "Nawada",
            "Patna",
            "Purnia (Purnea)",
            "Rohtas",
            "Saharsa",
            "Samastipur",
            "Saran",
            "Sheikhpura",
            "Sheohar",
            "Sitamarhi",
            "Siwan",
            "Supaul",
            "Vaishali",
            "West Champaran",
        ],
    },
    State {
        id: 5,
        name: "Chhattisgarh",
        districts: &[
            "Balod",
            "Baloda Bazar",
            "Balrampur",
            "Bastar",
            "Bemetara",
            "Bijapur",
            "Bilaspur",
            "Dantewada (South Bastar)",
            "Dhamtari",
            "Durg",
            "Gariaband",
            "Janjgir-Champa",
            "Jashpur",
            "Kabirdham (Kawardha)",
            "Kanker (North Bastar)",
            "Kondagaon",
            "Korba",
            "Koriya",
            "Mahasamund",
            "Mungeli",
            "Narayanpur",
            "Raigarh",
            "Raipur",
            "Rajnandgaon",
            "Sukma",
            "Surajpur",
            "Surguja",
        ],
    },
    State {
        id: 6,
        name: "Goa",
        districts: &[
            "North Goa",
            "South Goa",
        ],
    },
    State {
        id: 7,
        name: "Gujarat",
        districts: &[
            "Ahmedabad",
            "Amreli",
            "Anand",
            "Aravalli",
            "Banaskantha (Palanpur)",
            "Bharuch",
            "Bhavnagar",
            "Botad",
            "Chhota Udepur",
            "Dahod",
            "Dang (Ahwa)",
            "Devbhoomi Dwarka",
            "Gandhinagar",
            "Gir Somnath",
            "Jamnagar",
            "Junagadh",
            "Kheda (Nadiad)",
            "Kutch",
            "Mahisagar",
            "Mehsana",
            "Morbi",
            "Narmada (Rajpipla)",
            "Navsari",
            "Panchmahal (Godhra)",
            "Patan",
            "Porbandar",
            "Rajkot",
            "Sabarkantha (Himmatnagar)",
            "Surat",
            "Surendranagar",
            "Tapi (Vyara)",
            "Vadodara",
            "Valsad",
        ],
    },
    State {
        id: 8,
        name: "Haryana",
        districts: &[
            "Ambala",
            "Bhiwani",
            "Charkhi Dadri",
            "Faridabad",
            "Fatehabad",
            "Gurgaon",
            "Hisar",
            "Jhajjar",
            "Jind",
            "Kaithal",
            "Karnal",
            "Kurukshetra",
            "Mahendragarh",
            "Nuh",
            "Palwal",
            "Panchkula",
            "Panipat",
            "Rewari",
            "Rohtak",
            "Sirsa",
            "Sonipat",
            "Yamunanagar",
        ],
    },
    State {
        id: 9,
        name: "Himachal Pradesh",
        districts: &[
            "Bilaspur",
            "Chamba",
            "Hamirpur",
            "Kangra",
            "Kinnaur",
            "Kullu",
            "Lahaul & Spiti",
            "Mandi",
            "Shimla",
            "Sirmaur (Sirmour)",
            "Solan",
            "Una",
        ],
    },
    State {
        id: 10,
        name: "Jharkhand",
        districts: &[
            "Bokaro",
            "Chatra",
            "Deoghar",
            "Dhanbad",
            "Dumka",
            "East Singhbhum",
            "Garhwa",
            "Giridih",
            "Godda",
            "Gumla",
            "Hazaribag",
            "Jamtara",
            "Khunti",
            "Koderma",
            "Latehar",
            "Lohardaga",
            "Pakur",
            "Palamu",
            "Ramgarh",
            "Ranchi",
            "Sahibganj",
            "Seraikela-Kharsawan",
            "Simdega",
            "West Singhbhum",
        ],
    },
    State {
        id: 11,
        name: "Karnataka",
        districts: &[
            "Bagalkot",
            "Ballari (Bellary)",
            "Belagavi (Belgaum)",
            "Bengaluru Rural",
            "Bengaluru Urban",
            "Bidar",
            "Chamarajanagar",
            "Chikballapur",
            "Chikkamagaluru (Chikmagalur)",
            "Chitradurga",
            "Dakshina Kannada",
            "Davangere",
            "Dharwad",
            "Gadag",
            "Hassan",
            "Haveri",
            "Kalaburagi (Gulbarga)",
            "Kodagu",
            "Kolar",
            "Koppal",
            "Mandya",
            "Mysuru (Mysore)",
            "Raichur",
            "Ramanagara",
            "Shivamogga (Shimoga)",
            "Tumakuru (Tumkur)",
            "Udupi",
            "Uttara Kannada (Karwar)",
            "Vijayapura (Bijapur)",
            "Yadgir",
        ],
    },
    State {
        id: 12,
        name: "Kerala",
        districts: &[
            "Alappuzha",
            "Ernakulam",
            "Idukki",
            "Kannur",
            "Kasaragod",
            "Kollam",
            "Kottayam",
            "Kozhikode",
            "Malappuram",
            "Palakkad",
            "Pathanamthitta",
            "Thiruvananthapuram",
            "Thrissur",
            "Wayanad",
        ],
    },
    State {
        id: 13,
        name: "Madhya Pradesh",
        districts: &[
            "Agar Malwa",
            "Alirajpur",
            "Anuppur",
            "Ashoknagar",
            "Balaghat",
            "Barwani",
            "Betul",
            "Bhind",
            "Bhopal",
            "Burhanpur",
            "Chhatarpur",
            "Chhindwara",
            "Damoh",
            "Datia",
            "Dewas",
            "Dhar",
            "Dindori",
            "Guna",
            "Gwalior",
            "Harda",
            "Hoshangabad",
            "Indore",
            "Jabalpur",
            "Jhabua",
            "Katni",
            "Khandwa",
            "Khargone",
            "Mandla",
            "Mandsaur",
            "Morena",
            "Narsinghpur",
            "Neemuch",
            "Panna",
            "Raisen",
            "Rajgarh",
            "Ratlam",
            "Rewa",
            "Sagar",
            "Satna",
            "Sehore",
            "Seoni",
            "Shahdol",
            "Shajapur",
            "Sheopur",
            "Shivpuri",
            "Sidhi",
            "Singrauli",
            "Tikamgarh",
            "Ujjain",
            "Umaria",
            "Vidisha",
        ],
    },
    State {
        id: 14,
        name: "Maharashtra",
        districts: &[
            "Ahmednagar",
            "Akola",
            "Amravati",
            "Aurangabad",
            "Beed",
            "Bhandara",
            "Buldhana",
            "Chandrapur",
            "Dhule",
            "Gadchiroli",
            "Gondia",
            "Hingoli",
            "Jalgaon",
            "Jalna",
            "Kolhapur",
            "Latur",
            "Mumbai City",
            "Mumbai Suburban",
            "Nagpur",
            "Nanded",
            "Nandurbar",
            "Nashik",
            "Osmanabad",
            "Palghar",
            "Parbhani",
            "Pune",
            "Raigad",
            "Ratnagiri",
            "Sangli",
            "Satara",
            "Sindhudurg",
            "Solapur",
            "Thane",
            "Wardha",
            "Washim",
            "Yavatmal",
        ],
    },
    State {
        id: 15,
        name: "Manipur",
        districts: &[
            "Bishnupur",
            "Chandel",
            "Churachandpur",
            "Imphal East",
            "Imphal West",
            "Jiribam",
            "Kakching",
            "Kamjong",
            "Kangpokpi",
            "Noney",
            "Pherzawl",
            "Senapati",
            "Tamenglong",
            "Tengnoupal",
            "Thoubal",
            "Ukhrul",
        ],
    },
    State {
        id: 16,
        name: "Meghalaya",
        districts: &[
            "East Garo Hills",
            "East Jaintia Hills",
            "East Khasi Hills",
            "North Garo Hills",
            "Ri Bhoi",
            "South Garo Hills",
            "South West Garo Hills",
            "South West Khasi Hills",
            "West Garo Hills",
            "West Jaintia Hills",
            "West Khasi Hills",
        ],
    },
    State {
        id: 17,
        name: "Mizoram",
        districts: &[
            "Aizawl",
            "Champhai",
            "Kolasib",
            "Lawngtlai",
            "Lunglei",
            "Mamit",
            "Saiha",
            "Serchhip",
            "Hnahthial",
            "Khawzawl",
            "Saitual",
        ],
    },
    State {
        id: 18,
        name: "Nagaland",
        districts: &[
            "Dimapur",
            "Kiphire",
            "Kohima",
            "Longleng",
            "Mokokchung",
            "Mon",
            "Peren",
            "Phek",
            "Tuensang",
            "Wokha",
            "Zunheboto",
            "Noklak",
            "Tseminyu",
            "Chümoukedima",
            "Niuland",
            "Shamator",
        ],
    },
    State {
        id: 19,
        name: "Odisha",
        districts: &[
            "Angul",
            "Balangir",
            "Balasore",
            "Bargarh",
            "Bhadrak",
            "Boudh",
            "Cuttack",
            "Deogarh",
            "Dhenkanal",
            "Gajapati",
            "Ganjam",
            "Jagatsinghpur",
            "Jajpur",
            "Jharsuguda",
            "Kalahandi",
            "Kandhamal",
            "Kendrapara",
            "Kendujhar (Keonjhar)",
            "Khordha",
            "Koraput",
            "Malkangiri",
            "Mayurbhanj",
            "Nabarangpur",
            "Nayagarh",
            "Nuapada",
            "Puri",
            "Rayagada",
            "Sambalpur",
            "Sonepur",
            "Sundargarh",
        ],
    },
    State {
        id: 20,
        name: "Punjab",
        districts: &[
            "Amritsar",
            "Barnala",
            "Bathinda",
            "Faridkot",
            "Fatehgarh Sahib",
            "Fazilka",
            "Ferozepur",
            "Gurdaspur",
            "Hoshiarpur",
            "Jalandhar",
            "Kapurthala",
            "Ludhiana",
            "Malerkotla",
            "Mansa",
            "Moga",
            "Mohali",
            "Muktsar",
            "Pathankot",
            "Patiala",
            "Rupnagar",
            "Sangrur",
            "SAS Nagar",
            "SBS Nagar",
            "Sri Muktsar Sahib",
            "Tarn Taran",
        ],
    },
    State {
        id: 21,
        name: "Rajasthan",
        districts: &[
            "Ajmer",
            "Alwar",
            "Banswara",
            "Baran",
            "Barmer",
            "Bharatpur",
            "Bhilwara",
            "Bikaner",
            "Bundi",
            "Chittorgarh",
            "Churu",
            "Dausa",
            "Dholpur",
            "Dungarpur",
            "Hanumangarh",
            "Jaipur",
            "Jaisalmer",
            "Jalore",
            "Jhalawar",
            "Jhunjhunu",
            "Jodhpur",
            "Karauli",
            "Kota",
            "Nagaur",
            "Pali",
            "Pratapgarh",
            "Rajsamand",
            "Sawai Madhopur",
            "Sikar",
            "Sirohi",
            "Sri Ganganagar",
            "Tonk",
            "Udaipur",
        ],
    },
    State {
        id: 22,
        name: "Sikkim",
        districts: &[
            "East Sikkim",
            "North Sikkim",
            "South Sikkim",
            "West Sikkim",
            "Pakyong",
            "Soreng",
        ],
    },
    State {
        id: 23,
        name: "Tamil Nadu",
        districts: &[
            "Ariyalur",
            "Chengalpattu",
            "Chennai",
            "Coimbatore",
            "Cuddalore",
            "Dharmapuri",
            "Dindigul",
            "Erode",
            "Kallakurichi",
            "Kanchipuram",
            "Kanyakumari",
            "Karur",
            "Krishnagiri",
            "Madurai",
            "Mayiladuthurai",
            "Nagapattinam",
            "Namakkal",
            "Nilgiris",
            "Perambalur",
            "Pudukkottai",
            "Ramanathapuram",
            "Ranipet",
            "Salem",
            "Sivaganga",
            "Tenkasi",
            "Thanjavur",
            "Theni",
            "Thoothukudi",
            "Tiruchirappalli",
            "Tirunelveli",
            "Tirupathur",
            "Tiruppur",
            "Tiruvallur",
            "Tiruvannamalai",
            "Tiruvarur",
            "Vellore",
            "Viluppuram",
            "Virudhunagar",
        ],
    },
    State {
        id: 24,
        name: "Telangana",
        districts: &[
            "Adilabad",
            "Bhadradri Kothagudem",
            "Hyderabad",
            "Jagtial",
            "Jangaon",
            "Jayashankar Bhupalpally",
            "Jogulamba Gadwal",
            "Kamareddy",
            "Karimnagar",
            "Khammam",
            "Komaram Bheem",
            "Mahabubabad",
            "Mahabubnagar",
            "Mancherial",
            "Medak",
            "Medchal–Malkajgiri",
            "Mulugu",
            "Nagarkurnool",
            "Nalgonda",
            "Narayanpet",
            "Nirmal",
            "Nizamabad",
            "Peddapalli",
            "Rajanna Sircilla",
            "Ranga Reddy",
            "Sangareddy",
            "Siddipet",
            "Suryapet",
            "Vikarabad",
            "Wanaparthy",
            "Warangal Rural",
            "Warangal Urban",
            "Yadadri Bhuvanagiri",
        ],
    },
    State {
        id: 25,
        name: "Tripura",
        districts: &[
            "Dhalai",
            "Gomati",
            "Khowai",
            "North Tripura",
            "Sepahijala",
            "South Tripura",
            "Unakoti",
            "West Tripura",
        ],
    },
    State {
        id: 26,
        name: "Uttar Pradesh",
        districts: &[
            "Agra",
            "Aligarh",
            "Ambedkar Nagar",
            "Amethi",
            "Amroha",
            "Auraiya",
            "Ayodhya",
            "Azamgarh",
            "Baghpat",
            "Bahraich",
            "Ballia",
            "Balrampur",
            "Banda",
            "Barabanki",
            "Bareilly",
            "Basti",
            "Bhadohi",
            "Bijnor",
            "Budaun",
            "Bulandshahr",
            "Chandauli",
            "Chitrakoot",
            "Deoria",
            "Etah",
            "Etawah",
            "Farrukhabad",
            "Fatehpur",
            "Firozabad",
            "Gautam Buddha Nagar",
            "Ghaziabad",
            "Ghazipur",
            "Gonda",
            "Gorakhpur",
            "Hamirpur",
            "Hapur",
            "Hardoi",
            "Hathras",
            "Jalaun",
            "Jaunpur",
            "Jhansi",
            "Kannauj",
            "Kanpur Dehat",
            "Kanpur Nagar",
            "Kasganj",
            "Kaushambi",
            "Kheri",
            "Kushinagar",
            "Lalitpur",
            "Lucknow",
            "Maharajganj",
            "Mahoba",
            "Mainpuri",
            "Mathura",
            "Mau",
            "Meerut",
            "Mirzapur",
            "Moradabad",
            "Muzaffarnagar",
            "Pilibhit",
            "Pratapgarh",
            "Prayagraj",
            "Raebareli",
            "Rampur",
            "Saharanpur",
            "Sambhal",
            "Sant Kabir Nagar",
            "Sant Ravidas Nagar",
            "Shahjahanpur",
            "Shamli",
            "Shravasti",
            "Siddharthnagar",
            "Sitapur",
            "Sonbhadra",
            "Sultanpur",
            "Unnao",
            "Varanasi",
        ],
    },
    State {
        id: 27,
        name: "Uttarakhand",
        districts: &[
            "Almora",
            "Bageshwar",
            "Chamoli",
            "Champawat",
            "Dehradun",
            "Haridwar",
            "Nainital",
            "Pauri Garhwal",
            "Pithoragarh",
            "Rudraprayag",
            "Tehri Garhwal",
            "Udham Singh Nagar",
            "Uttarkashi",
        ],
    },
    State {
        id: 28,
        name: "West Bengal",
        districts: &[
            "Alipurduar",
            "Bankura",
            "Birbhum",
            "Cooch Behar",
            "Dakshin Dinajpur",
            "Darjeeling",
            "Hooghly",
            "Howrah",
            "Jalpaiguri",
            "Jhargram",
            "Kalimpong",
            "Kolkata",
            "Malda",
            "Murshidabad",
            "Nadia",
            "North 24 Parganas",
            "Paschim Bardhaman",
            "Paschim Medinipur",
            "Purba Bardhaman",
            "Purba Medinipur",
            "Purulia",
            "South 24 Parganas",
            "Uttar Dinajpur",
        ],
    },
    State {
        id: 29,
        name: "Andaman and Nicobar Islands",
        districts: &[
            "Nicobar",
            "North and Middle Andaman",
            "South Andaman",
        ],
    },
    State {
        id: 30,
        name: "Chandigarh",
        districts: &[
            "Chandigarh",
        ],
    },
    State {
        id: 31,
        name: "Dadra and Nagar Haveli and Daman and Diu",
        districts: &[
            "Dadra and Nagar Haveli",
            "Daman",
            "Diu",
        ],
    },
    State {
        id: 32,
        name: "Delhi",
        districts: &[
            "Central Delhi",
            "East Delhi",
            "New Delhi",
            "North Delhi",
            "North East Delhi",
            "North West Delhi",
            "Shahdara",
            "South Delhi",
            "South East Delhi",
            "South West Delhi",
            "West Delhi",
        ],
    },
    State {
        id: 33,
        name: "Jammu and Kashmir",
        districts: &[
            "Anantnag",
            "Bandipora",
            "Baramulla",
            "Budgam",
            "Doda",
            "Ganderbal",
            "Jammu",
            "Kathua",
            "Kishtwar",
            "Kulgam",
            "Kupwara",
            "Poonch",
            "Pulwama",
            "Rajouri",
            "Ramban",
            "Reasi",
            "Samba",
            "Shopian",
            "Srinagar",
            "Udhampur",
        ],
    },
    State {
        id: 34,
        name: "Ladakh",
        districts: &[
            "Kargil",
            "Leh",
        ],
    },
    State {
        id: 35,
        name: "Lakshadweep",
        districts: &[
            "Agatti",
            "Amini",
            "Andrott",
            "Bithra",
            "Chetlat",
            "Kadmat",
            "Kalpeni",
            "Kavaratti",
            "Kiltan",
            "Minicoy",
        ],
    },
    State {
        id: 36,
        name: "Puducherry",
        districts: &[
            "Karaikal",
            "Mahe",
            "Puducherry",
            "Yanam",
        ],
    },
];
