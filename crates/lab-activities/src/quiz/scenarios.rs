//! The fixed scenario deck.

use super::{CorrectMode, Scenario, Thinking};

/// Every scenario, in play order.
pub static SCENARIOS: [Scenario; 6] = [
    Scenario {
        situation: "You see a photo of a cute puppy",
        icon: "🐶",
        question: "How do you decide if it's cute?",
        human: Thinking {
            process: [
                "Your eyes see the puppy",
                "Your brain recognizes: big eyes, small size, fluffy",
                "Your emotions respond: 'Awww, so cute!'",
                "You FEEL happy and want to pet it",
            ],
            answer: "Look at big eyes and feel 'Awww!'",
            traits: [
                "Uses emotions",
                "Feels happiness",
                "Personal preference",
                "Instant gut feeling",
            ],
        },
        ai: Thinking {
            process: [
                "Camera captures pixels (tiny dots)",
                "Analyzes patterns: ear shape, eye size, proportions",
                "Compares to millions of 'cute' examples it learned",
                "Calculates probability: 95% match to 'cute puppy' pattern",
            ],
            answer: "Calculate: 95% matches 'cute puppy' pattern",
            traits: [
                "No emotions",
                "Uses math/patterns",
                "Compares to training data",
                "Probability-based",
            ],
        },
        correct: CorrectMode::Both,
        explanation: "Humans use EMOTIONS and feelings. AI uses MATH and patterns. Both can identify cute puppies, but in totally different ways!",
    },
    Scenario {
        situation: "Choosing what movie to watch tonight",
        icon: "🎬",
        question: "How do you decide?",
        human: Thinking {
            process: [
                "Think about your current mood",
                "Remember movies you loved before",
                "Consider how you're feeling: tired? excited? sad?",
                "Make a choice based on emotions and memories",
            ],
            answer: "Pick based on my mood and feelings",
            traits: [
                "Considers emotions",
                "Uses personal experiences",
                "Flexible based on mood",
                "Can change mind randomly",
            ],
        },
        ai: Thinking {
            process: [
                "Analyze your watch history data",
                "Find patterns: You watch comedies on Fridays",
                "Calculate: 80% of similar users liked Movie X",
                "Recommend based on mathematical probability",
            ],
            answer: "Recommend based on pattern: 'Users like you watched this'",
            traits: [
                "No understanding of 'mood'",
                "Uses statistics",
                "Pattern matching only",
                "Consistent algorithm",
            ],
        },
        correct: CorrectMode::Both,
        explanation: "Humans choose based on FEELINGS and CONTEXT. AI uses PATTERNS from data. Neither is wrong - just different!",
    },
    Scenario {
        situation: "Seeing your friend looks sad",
        icon: "😢",
        question: "How do you know they need help?",
        human: Thinking {
            process: [
                "Notice facial expression and body language",
                "Remember similar times when YOU felt sad",
                "Feel empathy - understand their emotions",
                "Decide to comfort them because you CARE",
            ],
            answer: "Feel their sadness and want to help",
            traits: [
                "Has empathy",
                "Understands emotions",
                "Cares about feelings",
                "Can truly comfort",
            ],
        },
        ai: Thinking {
            process: [
                "Detect facial features: corners of mouth down, eyes lowered",
                "Match pattern to 'sad face' in training data",
                "Output: 87% probability of sadness detected",
                "No actual understanding of what sadness FEELS like",
            ],
            answer: "Detect sad face pattern: 87% match",
            traits: [
                "No real empathy",
                "Pattern recognition only",
                "Can't actually 'care'",
                "No emotional understanding",
            ],
        },
        correct: CorrectMode::Human,
        explanation: "Only HUMANS can truly feel empathy and care! AI can detect sad faces but doesn't understand what sadness feels like. Emotions are uniquely human!",
    },
    Scenario {
        situation: "Sorting 10,000 photos by date",
        icon: "📸",
        question: "How do you organize them?",
        human: Thinking {
            process: [
                "Look at each photo one by one",
                "Read the date manually",
                "Drag and drop into folders",
                "Takes hours and you might make mistakes when tired",
            ],
            answer: "Manually check dates - takes forever!",
            traits: [
                "Very slow",
                "Gets tired",
                "Makes mistakes",
                "Better for small amounts",
            ],
        },
        ai: Thinking {
            process: [
                "Read metadata (hidden data) from all 10,000 photos instantly",
                "Sort by date using algorithm in seconds",
                "No tiredness, no mistakes",
                "Complete task in under 1 minute",
            ],
            answer: "Sort all 10,000 instantly by reading metadata",
            traits: [
                "Super fast",
                "Never gets tired",
                "100% accurate",
                "Perfect for repetitive tasks",
            ],
        },
        correct: CorrectMode::Ai,
        explanation: "AI is AMAZING at repetitive tasks with clear rules! Humans would take hours and get tired. This is where AI truly shines!",
    },
    Scenario {
        situation: "Reading a funny joke",
        icon: "😂",
        question: "How do you know it's funny?",
        human: Thinking {
            process: [
                "Understand the context and cultural references",
                "Get the surprise twist or wordplay",
                "Feel the humor and laugh naturally",
                "Appreciate timing and delivery",
            ],
            answer: "Understand the joke and laugh because it's funny!",
            traits: [
                "Gets cultural context",
                "Understands humor",
                "Genuinely laughs",
                "Knows timing matters",
            ],
        },
        ai: Thinking {
            process: [
                "Analyze words and structure",
                "Try to match patterns of 'funny' content",
                "Doesn't actually 'get' why it's funny",
                "Can identify joke format but can't truly laugh",
            ],
            answer: "Detect joke pattern but don't understand why it's funny",
            traits: [
                "No sense of humor",
                "Pattern matching only",
                "Can't truly laugh",
                "Misses subtle comedy",
            ],
        },
        correct: CorrectMode::Human,
        explanation: "Humans understand HUMOR, context, and culture! AI can identify jokes but doesn't 'get' why they're funny. Laughter and joy are human experiences!",
    },
    Scenario {
        situation: "Translating a document from Spanish to English",
        icon: "🌍",
        question: "How do you translate it?",
        human: Thinking {
            process: [
                "Read each sentence carefully",
                "Think about word meanings and context",
                "Type out translation",
                "Takes a long time, might miss some words",
            ],
            answer: "Translate word by word - slow but understanding context",
            traits: [
                "Understands nuance",
                "Gets cultural meaning",
                "Slow for long texts",
                "Can explain WHY",
            ],
        },
        ai: Thinking {
            process: [
                "Analyze millions of Spanish-English translation pairs",
                "Match patterns and word relationships",
                "Translate entire document in seconds",
                "Highly accurate for common phrases",
            ],
            answer: "Translate entire document in seconds using patterns",
            traits: [
                "Super fast",
                "Uses training data",
                "Great for common phrases",
                "May miss cultural nuance",
            ],
        },
        correct: CorrectMode::Both,
        explanation: "AI is FAST at translation! Humans understand CULTURAL CONTEXT better. For quick translations, AI wins. For poetry or cultural texts, humans understand deeper meaning!",
    },
];
