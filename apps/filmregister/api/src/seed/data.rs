//! Sample catalogue loaded by the `default-init` and `demo` profiles.

use domain_catalog::{Movie, MovieRequest, MovieType};

pub const PASSWORD: &str = "password123";

/// (username, email)
pub const USERS: &[(&str, &str)] = &[
    ("john_doe", "john@example.com"),
    ("movie_fan", "moviefan@example.com"),
    ("cinephile", "cinephile@example.com"),
    ("series_lover", "serieslover@example.com"),
];

/// (username, title, rating, comment)
pub const REVIEWS: &[(&str, &str, i32, &str)] = &[
    (
        "john_doe",
        "The Shawshank Redemption",
        10,
        "An absolute masterpiece. One of the best films ever made!",
    ),
    (
        "john_doe",
        "The Dark Knight",
        9,
        "Heath Ledger's Joker is legendary. Incredible movie!",
    ),
    ("movie_fan", "Inception", 10, "Mind-bending! Christopher Nolan at his best."),
    ("movie_fan", "Interstellar", 9, "Visually stunning and emotionally powerful."),
    (
        "cinephile",
        "The Godfather",
        10,
        "The greatest film ever made. Perfect in every way.",
    ),
    ("cinephile", "Pulp Fiction", 9, "Tarantino's dialogue is unmatched. A classic!"),
    (
        "series_lover",
        "Breaking Bad",
        10,
        "The best TV series of all time. Bryan Cranston is phenomenal!",
    ),
    (
        "series_lover",
        "Game of Thrones",
        8,
        "Amazing show, though the ending could have been better.",
    ),
];

/// (username, title)
pub const WATCHLIST: &[(&str, &str)] = &[
    ("john_doe", "Inception"),
    ("john_doe", "Interstellar"),
    ("john_doe", "The Matrix"),
    ("movie_fan", "The Godfather"),
    ("movie_fan", "Pulp Fiction"),
    ("movie_fan", "Fight Club"),
    ("cinephile", "Breaking Bad"),
    ("cinephile", "Game of Thrones"),
    ("series_lover", "The Shawshank Redemption"),
    ("series_lover", "The Dark Knight"),
];

pub struct SeedMovie {
    pub title: &'static str,
    pub description: &'static str,
    pub release_year: i32,
    pub genre: &'static str,
    pub director: &'static str,
    pub image_url: &'static str,
    pub actors: &'static str,
    pub movie_type: MovieType,
    pub seasons: Option<i32>,
    pub episodes: Option<i32>,
    pub imdb_rating: f64,
}

impl SeedMovie {
    pub fn to_movie(&self) -> Movie {
        let request = MovieRequest {
            title: self.title.to_string(),
            description: Some(self.description.to_string()),
            release_year: Some(self.release_year),
            genre: Some(self.genre.to_string()),
            director: Some(self.director.to_string()),
            image_url: Some(self.image_url.to_string()),
            actors: Some(self.actors.to_string()),
            movie_type: Some(self.movie_type),
            seasons: self.seasons,
            episodes: self.episodes,
            imdb_id: None,
            imdb_rating: Some(self.imdb_rating),
        };
        Movie::new(request, None)
    }
}

/// 20 films followed by 5 series.
pub const MOVIES: &[SeedMovie] = &[
    SeedMovie {
        title: "The Shawshank Redemption",
        description: "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
        release_year: 1994,
        genre: "Drama",
        director: "Frank Darabont",
        image_url: "https://image.tmdb.org/t/p/w500/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg",
        actors: "Tim Robbins, Morgan Freeman",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 9.3,
    },
    SeedMovie {
        title: "The Dark Knight",
        description: "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
        release_year: 2008,
        genre: "Action",
        director: "Christopher Nolan",
        image_url: "https://image.tmdb.org/t/p/w500/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
        actors: "Christian Bale, Heath Ledger, Aaron Eckhart",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 9.0,
    },
    SeedMovie {
        title: "Inception",
        description: "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
        release_year: 2010,
        genre: "Sci-Fi",
        director: "Christopher Nolan",
        image_url: "https://image.tmdb.org/t/p/w500/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg",
        actors: "Leonardo DiCaprio, Joseph Gordon-Levitt, Ellen Page",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 8.8,
    },
    SeedMovie {
        title: "Pulp Fiction",
        description: "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of diner bandits intertwine in four tales of violence and redemption.",
        release_year: 1994,
        genre: "Crime",
        director: "Quentin Tarantino",
        image_url: "https://image.tmdb.org/t/p/w500/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg",
        actors: "John Travolta, Uma Thurman, Samuel L. Jackson",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 8.9,
    },
    SeedMovie {
        title: "Forrest Gump",
        description: "The presidencies of Kennedy and Johnson, the Vietnam War, the Watergate scandal and other historical events unfold from the perspective of an Alabama man with an IQ of 75, whose only desire is to be reunited with his childhood sweetheart.",
        release_year: 1994,
        genre: "Drama",
        director: "Robert Zemeckis",
        image_url: "https://image.tmdb.org/t/p/w500/arw2vcBveWOVZr6pxd9XTd1TdQa.jpg",
        actors: "Tom Hanks, Robin Wright, Gary Sinise",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 8.8,
    },
    SeedMovie {
        title: "The Matrix",
        description: "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.",
        release_year: 1999,
        genre: "Sci-Fi",
        director: "The Wachowskis",
        image_url: "https://image.tmdb.org/t/p/w500/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
        actors: "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 8.7,
    },
    SeedMovie {
        title: "Goodfellas",
        description: "The story of Henry Hill and his life in the mob, covering his relationship with his wife Karen Hill and his mob partners Jimmy Conway and Tommy DeVito.",
        release_year: 1990,
        genre: "Crime",
        director: "Martin Scorsese",
        image_url: "https://image.tmdb.org/t/p/w500/aKuFiU82s5ISJpGZp7YkIr3kCUd.jpg",
        actors: "Robert De Niro, Ray Liotta, Joe Pesci",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 8.7,
    },
    SeedMovie {
        title: "Fight Club",
        description: "An insomniac office worker and a devil-may-care soap maker form an underground fight club that evolves into much more.",
        release_year: 1999,
        genre: "Drama",
        director: "David Fincher",
        image_url: "https://image.tmdb.org/t/p/w500/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
        actors: "Brad Pitt, Edward Norton, Helena Bonham Carter",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 8.8,
    },
    SeedMovie {
        title: "The Lord of the Rings: The Return of the King",
        description: "Gandalf and Aragorn lead the World of Men against Sauron's army to draw his gaze from Frodo and Sam as they approach Mount Doom with the One Ring.",
        release_year: 2003,
        genre: "Fantasy",
        director: "Peter Jackson",
        image_url: "https://image.tmdb.org/t/p/w500/rCzpDGLbOoPwLjy3OAm5NUPOTrC.jpg",
        actors: "Elijah Wood, Viggo Mortensen, Ian McKellen",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 9.0,
    },
    SeedMovie {
        title: "Star Wars: Episode V - The Empire Strikes Back",
        description: "After the Rebels are brutally overpowered by the Empire on the ice planet Hoth, Luke Skywalker begins Jedi training with Yoda, while his friends are pursued across the galaxy.",
        release_year: 1980,
        genre: "Sci-Fi",
        director: "Irvin Kershner",
        image_url: "https://image.tmdb.org/t/p/w500/nNAeTmF4CtdSgMDplXTDPOpYzsX.jpg",
        actors: "Mark Hamill, Harrison Ford, Carrie Fisher",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 8.7,
    },
    SeedMovie {
        title: "Interstellar",
        description: "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
        release_year: 2014,
        genre: "Sci-Fi",
        director: "Christopher Nolan",
        image_url: "https://image.tmdb.org/t/p/w500/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
        actors: "Matthew McConaughey, Anne Hathaway, Jessica Chastain",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 8.7,
    },
    SeedMovie {
        title: "The Silence of the Lambs",
        description: "A young FBI cadet must receive the help of an incarcerated and manipulative cannibal killer to help catch another serial killer.",
        release_year: 1991,
        genre: "Thriller",
        director: "Jonathan Demme",
        image_url: "https://image.tmdb.org/t/p/w500/uS9m8OBk1A8eM9I042bx8XXpqAq.jpg",
        actors: "Jodie Foster, Anthony Hopkins, Scott Glenn",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 8.6,
    },
    SeedMovie {
        title: "Saving Private Ryan",
        description: "Following the Normandy Landings, a group of U.S. soldiers go behind enemy lines to retrieve a paratrooper whose brothers have been killed in action.",
        release_year: 1998,
        genre: "War",
        director: "Steven Spielberg",
        image_url: "https://image.tmdb.org/t/p/w500/uqx37qS8W6f55IfLJUXqHcL5Zpk.jpg",
        actors: "Tom Hanks, Matt Damon, Tom Sizemore",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 8.6,
    },
    SeedMovie {
        title: "The Green Mile",
        description: "The lives of guards on Death Row are affected by one of their charges: a black man accused of child murder and rape, yet who has a mysterious gift.",
        release_year: 1999,
        genre: "Drama",
        director: "Frank Darabont",
        image_url: "https://image.tmdb.org/t/p/w500/velWPhVMQeQKcxggNEU8YmIo52R.jpg",
        actors: "Tom Hanks, Michael Clarke Duncan, David Morse",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 8.6,
    },
    SeedMovie {
        title: "The Godfather",
        description: "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
        release_year: 1972,
        genre: "Crime",
        director: "Francis Ford Coppola",
        image_url: "https://image.tmdb.org/t/p/w500/3bhkrj58Vtu7enYsRolD1fZdja1.jpg",
        actors: "Marlon Brando, Al Pacino, James Caan",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 9.2,
    },
    SeedMovie {
        title: "Schindler's List",
        description: "In German-occupied Poland during World War II, industrialist Oskar Schindler gradually becomes concerned for his Jewish workforce after witnessing their persecution by the Nazis.",
        release_year: 1993,
        genre: "Drama",
        director: "Steven Spielberg",
        image_url: "https://image.tmdb.org/t/p/w500/sF1U4EUQS8YHUYjNl3pMGNIQyr0.jpg",
        actors: "Liam Neeson, Ben Kingsley, Ralph Fiennes",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 9.0,
    },
    SeedMovie {
        title: "The Prestige",
        description: "After a tragic accident, two stage magicians engage in a battle to create the ultimate illusion while sacrificing everything they have to outwit each other.",
        release_year: 2006,
        genre: "Drama",
        director: "Christopher Nolan",
        image_url: "https://image.tmdb.org/t/p/w500/bdN3gXuIZYaJP7ftKK2sU0nPtEA.jpg",
        actors: "Christian Bale, Hugh Jackman, Scarlett Johansson",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 8.5,
    },
    SeedMovie {
        title: "Gladiator",
        description: "A former Roman General sets out to exact vengeance against the corrupt emperor who murdered his family and sent him into slavery.",
        release_year: 2000,
        genre: "Action",
        director: "Ridley Scott",
        image_url: "https://image.tmdb.org/t/p/w500/ty8TGRuvJLPUmAR1H1nRIsgwvim.jpg",
        actors: "Russell Crowe, Joaquin Phoenix, Connie Nielsen",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 8.5,
    },
    SeedMovie {
        title: "The Departed",
        description: "An undercover cop and a mole in the police attempt to identify each other while infiltrating an Irish gang in South Boston.",
        release_year: 2006,
        genre: "Crime",
        director: "Martin Scorsese",
        image_url: "https://image.tmdb.org/t/p/w500/nT97ifVT2J1yMQmeq20Qblg61T.jpg",
        actors: "Leonardo DiCaprio, Matt Damon, Jack Nicholson",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 8.5,
    },
    SeedMovie {
        title: "The Usual Suspects",
        description: "A sole survivor tells of the twisty events leading up to a horrific gun battle on a boat, which began when five criminals met at a seemingly random police lineup.",
        release_year: 1995,
        genre: "Thriller",
        director: "Bryan Singer",
        image_url: "https://image.tmdb.org/t/p/w500/b9vGNSDv7ABFzpJHj3a3gSy2lqI.jpg",
        actors: "Kevin Spacey, Gabriel Byrne, Chazz Palminteri",
        movie_type: MovieType::Movie,
        seasons: None,
        episodes: None,
        imdb_rating: 8.5,
    },
    SeedMovie {
        title: "Breaking Bad",
        description: "A high school chemistry teacher turned methamphetamine producer partners with a former student to secure his family's future after being diagnosed with terminal cancer.",
        release_year: 2008,
        genre: "Crime",
        director: "Vince Gilligan",
        image_url: "https://image.tmdb.org/t/p/w500/ggFHVNu6YYI5L9pCfOacjizRGt.jpg",
        actors: "Bryan Cranston, Aaron Paul, Anna Gunn",
        movie_type: MovieType::TvSeries,
        seasons: Some(5),
        episodes: Some(62),
        imdb_rating: 9.5,
    },
    SeedMovie {
        title: "Game of Thrones",
        description: "Nine noble families fight for control over the lands of Westeros, while an ancient enemy returns after being dormant for millennia.",
        release_year: 2011,
        genre: "Fantasy",
        director: "David Benioff, D.B. Weiss",
        image_url: "https://image.tmdb.org/t/p/w500/u3bZgnGQ9T01sWNhyveQz0wH0Hl.jpg",
        actors: "Emilia Clarke, Peter Dinklage, Kit Harington",
        movie_type: MovieType::TvSeries,
        seasons: Some(8),
        episodes: Some(73),
        imdb_rating: 9.2,
    },
    SeedMovie {
        title: "Stranger Things",
        description: "When a young boy disappears, his mother, a police chief and his friends must confront terrifying supernatural forces in order to get him back.",
        release_year: 2016,
        genre: "Sci-Fi",
        director: "The Duffer Brothers",
        image_url: "https://image.tmdb.org/t/p/w500/x2LSRK2Cm7MZhjluni1msVJ3wDF.jpg",
        actors: "Millie Bobby Brown, Finn Wolfhard, Winona Ryder",
        movie_type: MovieType::TvSeries,
        seasons: Some(4),
        episodes: Some(34),
        imdb_rating: 8.7,
    },
    SeedMovie {
        title: "The Crown",
        description: "Follows the political rivalries and romance of Queen Elizabeth II's reign and the events that shaped the second half of the 20th century.",
        release_year: 2016,
        genre: "Drama",
        director: "Peter Morgan",
        image_url: "https://image.tmdb.org/t/p/w500/1M876KPjulVwppEpldhdc8V4o68.jpg",
        actors: "Claire Foy, Olivia Colman, Imelda Staunton",
        movie_type: MovieType::TvSeries,
        seasons: Some(6),
        episodes: Some(60),
        imdb_rating: 8.6,
    },
    SeedMovie {
        title: "The Mandalorian",
        description: "The travels of a lone bounty hunter in the outer reaches of the galaxy, far from the authority of the New Republic.",
        release_year: 2019,
        genre: "Sci-Fi",
        director: "Jon Favreau",
        image_url: "https://image.tmdb.org/t/p/w500/eU1i6eHXlzMOlEq0ku1Rzq7Y4wA.jpg",
        actors: "Pedro Pascal, Gina Carano, Giancarlo Esposito",
        movie_type: MovieType::TvSeries,
        seasons: Some(3),
        episodes: Some(24),
        imdb_rating: 8.7,
    },
];
