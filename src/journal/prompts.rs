//! Canned prompts offered to get a journal entry started.

/// Micro-prompts, in the order they are listed to the user.
pub const MICRO_PROMPTS: &[&str] = &[
    "One small moment of ease I noticed today was…",
    "Right now, my body feels most tense in… and that sensation feels like…",
    "If my body had a voice today, it would say…",
    "Something that gently soothed me today (even a little) was…",
    "When my pain rose today, I responded by…",
    "A tiny act of care I offered myself was…",
    "One thing I want to thank my body for is…",
    "A boundary I honored (or want to try next time) was…",
    "The weather or environment affected me by…",
    "My energy levels moved like this across the day…",
    "A sensation that changed after breathing slowly was…",
    "I noticed my pain was easier/harder when I was…",
    "One supportive phrase I can tell myself is…",
    "A song, sound, or silence that helped was…",
    "Something I postponed or paced well today was…",
    "If ease were a color or texture right now, it would be…",
    "One thing I can control today is… One thing I'll let be is…",
    "A person or pet that brought comfort was…",
    "One place in my body that felt neutral (or less intense) was…",
    "A small win I might have missed if I wasn't looking is…",
    "What I needed most this morning/afternoon/evening was…",
    "A kindness I received (or offered) was…",
    "My sleep influenced my pain by…",
    "One movement or stretch that felt okay was…",
    "A helpful position/posture I found was…",
    "I noticed my thoughts saying… and I gently replied…",
    "When I stepped outside (or looked out a window), I felt…",
    "A fear I can acknowledge without fixing today is…",
    "Something I can ask for help with is…",
    "One part of my routine I want to soften is…",
    "A food or drink that felt supportive was…",
    "The most challenging moment today was… and I got through it by…",
    "A reminder I want to leave for future-me on a hard day…",
    "If comfort were a place, it would look like…",
    "One value I still lived today (despite pain) was…",
    "What I said \"no\" to (or wish I had) was…",
    "My breath felt like… and changed to…",
    "Something I learned about my triggers (or relievers) is…",
    "I noticed judgment in my mind when… and I met it with…",
    "A micro-break that helped was…",
    "My pain made this task harder… and I adapted by…",
    "An expectation I can gently loosen is…",
    "I'm grateful my body allowed me to…",
    "A scent, tea, or temperature that soothed me was…",
    "An image or memory that brought ease was…",
    "One step I can take to pace tomorrow is…",
    "I practiced acceptance today when…",
    "I practiced advocacy (for myself) today by…",
    "A limit I respected was… and that felt…",
    "What compassion looks like for me tonight is…",
    "A worry I'll place on a mental shelf for now is…",
    "I noticed catastrophizing when… and reframed it to…",
    "My inner critic said… and my kinder voice said…",
    "One thing I can do 1% gentler is…",
    "A flare signal I noticed early was…",
    "Three words that describe my body right now are…",
    "I am proud that I… (even if small)",
    "I allowed myself to rest when…",
    "A tool from my 'comfort kit' I used (or want to try) is…",
    "I felt seen or understood when…",
    "I honored my pace today by…",
    "The most supportive time of day for me is… because…",
    "A belief about pain I'm revisiting is…",
    "I can bring curiosity to this sensation by asking…",
    "What would ease look like for the next 10 minutes?",
    "A gentle movement I might try tomorrow is…",
    "I forgave myself for…",
    "One expectation I'll carry lighter is…",
    "A small joy that coexisted with pain was…",
    "I'm noticing my breath in this way…",
    "My posture experiment today felt…",
    "I asked for (or will ask for) accommodations by…",
    "Something I want my future clinician to know is…",
    "I tracked a pattern between activity and pain: …",
    "I noticed numbness/tingling/pressure described as…",
    "I felt more/less sensitive to light/sound/temperature when…",
    "I practiced grounding by noticing 5-4-3-2-1…",
    "I gave myself permission to…",
    "When plans changed because of pain, I…",
    "I softened a should/must into could/might by…",
    "Sleep prep that may help tonight is…",
    "A gentle affirmation I'll keep nearby is…",
    "I balanced connection and solitude by…",
    "I tried (or will try) a pleasant activity: …",
    "I limited scrolling/news and noticed…",
    "I hydrated/fueled and my body responded by…",
    "I noticed kinks/tightness melt a bit when…",
    "An accessibility aid or tool that helped was…",
    "I created a kinder workstation/chair/bed setup by…",
    "I named this emotion and let it be: …",
    "If pain had weather today, it would be…",
    "I chose my battles by focusing on…",
    "I let someone support me by…",
    "I practiced saying \"that's enough for now\" when…",
    "A hopeful thread I can follow is…",
    "I reframed all-or-nothing thinking to…",
    "My body surprised me today when…",
    "I reminded myself: pain is real, and so is…",
    "I noticed a 1% improvement in…",
    "I gently planned a flare contingency: …",
    "I felt grounded when my senses noticed…",
    "The next right tiny step is…",
    "I will end today with one kind thought for my body: …",
];

/// Look up a prompt by its position in [`MICRO_PROMPTS`].
pub fn prompt(index: usize) -> Option<&'static str> {
    MICRO_PROMPTS.get(index).copied()
}

/// Put `prompt` ahead of the current draft, separated by a blank line.
///
/// A draft holding only whitespace is replaced.
pub fn insert_prompt_into_draft(current_draft: &str, prompt: &str) -> String {
    if current_draft.trim().is_empty() {
        format!("{}\n\n", prompt)
    } else {
        format!("{}\n\n{}", prompt, current_draft)
    }
}
