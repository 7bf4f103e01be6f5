//! Reference headlines served by the mock provider, in the raw shape a news
//! API would return them.

use nr_core::Category;
use serde_json::{json, Value};

/// Raw article list for a category.
pub fn raw_articles(category: Category) -> Value {
    match category {
        Category::General => general(),
        Category::Business => business(),
        Category::Technology => technology(),
        Category::Sports => sports(),
        Category::Health => health(),
    }
}

/// Every article of every category, first occurrence of each url wins.
pub fn search_corpus() -> Value {
    let mut seen = std::collections::HashSet::new();
    let articles: Vec<Value> = Category::ALL
        .into_iter()
        .filter_map(|category| match raw_articles(category) {
            Value::Array(items) => Some(items),
            _ => None,
        })
        .flatten()
        .filter(|item| {
            let url = item.get("url").and_then(Value::as_str).unwrap_or_default();
            seen.insert(url.to_string())
        })
        .collect();
    Value::Array(articles)
}

fn general() -> Value {
    json!([
        {
            "source": { "id": "tech-crunch", "name": "TechCrunch" },
            "author": "Sarah Johnson",
            "title": "New AI Breakthrough Changes Everything",
            "description": "Researchers have developed a new AI model that can understand complex human emotions from text.",
            "url": "https://example.com/ai-breakthrough",
            "urlToImage": "https://picsum.photos/id/237/800/600",
            "publishedAt": "2023-11-25T09:45:00Z",
            "content": "A team of researchers has announced a breakthrough in artificial intelligence that allows machines to better understand human emotions..."
        },
        {
            "source": { "id": "wired", "name": "Wired" },
            "author": "James Smith",
            "title": "The Future of Electric Vehicles",
            "description": "New battery technology could double the range of electric vehicles.",
            "url": "https://example.com/ev-future",
            "urlToImage": "https://picsum.photos/id/1071/800/600",
            "publishedAt": "2023-11-24T14:30:00Z",
            "content": "A new battery technology developed by researchers could potentially double the range of electric vehicles..."
        },
        {
            "source": { "id": "bbc-news", "name": "BBC News" },
            "author": "Emma Wilson",
            "title": "Global Climate Summit Reaches Historic Agreement",
            "description": "World leaders have agreed to ambitious new climate targets at the annual summit.",
            "url": "https://example.com/climate-summit",
            "urlToImage": "https://picsum.photos/id/1059/800/600",
            "publishedAt": "2023-11-23T18:15:00Z",
            "content": "In a historic agreement, world leaders at the Global Climate Summit have committed to ambitious new targets..."
        },
        {
            "source": { "id": "the-verge", "name": "The Verge" },
            "author": "Michael Brown",
            "title": "New Smartphone Redefines Mobile Photography",
            "description": "The latest flagship smartphone comes with a revolutionary camera system.",
            "url": "https://example.com/smartphone-camera",
            "urlToImage": "https://picsum.photos/id/160/800/600",
            "publishedAt": "2023-11-22T10:00:00Z",
            "content": "The newly released flagship smartphone features a revolutionary camera system that could redefine mobile photography..."
        },
        {
            "source": { "id": "scientific-american", "name": "Scientific American" },
            "author": "Dr. Jennifer Lee",
            "title": "Scientists Discover New Species in Amazon Rainforest",
            "description": "A team of biologists has identified several previously unknown species during an expedition.",
            "url": "https://example.com/amazon-species",
            "urlToImage": "https://picsum.photos/id/176/800/600",
            "publishedAt": "2023-11-21T12:30:00Z",
            "content": "During a recent expedition to the Amazon rainforest, a team of biologists discovered several previously unknown species..."
        }
    ])
}

fn business() -> Value {
    json!([
        {
            "source": { "id": "financial-times", "name": "Financial Times" },
            "author": "Robert Johnson",
            "title": "Markets React to Federal Reserve Decision",
            "description": "Global markets show mixed reactions following the latest Federal Reserve interest rate announcement.",
            "url": "https://example.com/markets-fed",
            "urlToImage": "https://picsum.photos/id/201/800/600",
            "publishedAt": "2023-11-25T16:45:00Z",
            "content": "Global financial markets showed mixed reactions on Thursday following the Federal Reserve's latest announcement on interest rates..."
        },
        {
            "source": { "id": "bloomberg", "name": "Bloomberg" },
            "author": "Lisa Chen",
            "title": "Tech Giant Announces Major Acquisition",
            "description": "One of the world's largest tech companies has announced a $10 billion acquisition of an AI startup.",
            "url": "https://example.com/tech-acquisition",
            "urlToImage": "https://picsum.photos/id/42/800/600",
            "publishedAt": "2023-11-24T09:30:00Z",
            "content": "In a move that shocked industry analysts, one of the world's largest technology companies announced yesterday that it would acquire an AI startup for $10 billion..."
        }
    ])
}

fn technology() -> Value {
    json!([
        {
            "source": { "id": "wired", "name": "Wired" },
            "author": "David Miller",
            "title": "Quantum Computing Reaches New Milestone",
            "description": "Researchers have achieved quantum supremacy with a new 128-qubit processor.",
            "url": "https://example.com/quantum-milestone",
            "urlToImage": "https://picsum.photos/id/119/800/600",
            "publishedAt": "2023-11-25T11:20:00Z",
            "content": "A team of quantum computing researchers has announced they've reached a new milestone with a 128-qubit processor that achieved quantum supremacy..."
        },
        {
            "source": { "id": "tech-radar", "name": "TechRadar" },
            "author": "Sarah Williams",
            "title": "Next-Gen VR Headsets Promise Full Immersion",
            "description": "New virtual reality technology aims to engage all five senses for complete immersion.",
            "url": "https://example.com/vr-immersion",
            "urlToImage": "https://picsum.photos/id/96/800/600",
            "publishedAt": "2023-11-23T14:15:00Z",
            "content": "The next generation of virtual reality headsets promises to engage all five senses, creating a fully immersive experience unlike anything currently available..."
        }
    ])
}

fn sports() -> Value {
    json!([
        {
            "source": { "id": "espn", "name": "ESPN" },
            "author": "Mike Johnson",
            "title": "Underdog Team Wins Championship in Stunning Upset",
            "description": "In a shocking turn of events, the underdogs defeated the reigning champions in the final match.",
            "url": "https://example.com/sports-upset",
            "urlToImage": "https://picsum.photos/id/26/800/600",
            "publishedAt": "2023-11-25T22:45:00Z",
            "content": "In what many are calling one of the biggest upsets in sports history, the underdogs defeated the reigning champions in the final match of the championship..."
        },
        {
            "source": { "id": "sports-illustrated", "name": "Sports Illustrated" },
            "author": "Jane Thompson",
            "title": "Star Player Signs Record-Breaking Contract",
            "description": "The league's most valuable player has signed a historic contract extension worth millions.",
            "url": "https://example.com/player-contract",
            "urlToImage": "https://picsum.photos/id/28/800/600",
            "publishedAt": "2023-11-24T18:30:00Z",
            "content": "The league's most valuable player has signed a historic contract extension that will make them the highest-paid athlete in the sport's history..."
        }
    ])
}

fn health() -> Value {
    json!([
        {
            "source": { "id": "medical-news", "name": "Medical News Today" },
            "author": "Dr. Susan Brown",
            "title": "Breakthrough in Cancer Treatment Shows Promise",
            "description": "A new immunotherapy approach has shown remarkable results in early clinical trials.",
            "url": "https://example.com/cancer-breakthrough",
            "urlToImage": "https://picsum.photos/id/287/800/600",
            "publishedAt": "2023-11-25T08:15:00Z",
            "content": "Researchers have reported promising results from early clinical trials of a new immunotherapy approach for treating certain types of cancer..."
        },
        {
            "source": { "id": "health-magazine", "name": "Health Magazine" },
            "author": "Mark Davis",
            "title": "Study Reveals Benefits of Mediterranean Diet",
            "description": "New research confirms the long-term health benefits of following a Mediterranean diet.",
            "url": "https://example.com/mediterranean-diet",
            "urlToImage": "https://picsum.photos/id/292/800/600",
            "publishedAt": "2023-11-22T13:45:00Z",
            "content": "A comprehensive new study has provided further evidence of the long-term health benefits associated with following a Mediterranean diet..."
        }
    ])
}
